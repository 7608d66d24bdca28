// Peer reviews: free-text messages one player writes about another.

pub mod handlers;
