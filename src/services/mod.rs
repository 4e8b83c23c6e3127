pub mod order_submitter;

pub use order_submitter::OrderSubmitter;
