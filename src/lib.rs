pub mod net;
pub mod queue;
pub mod scenario;
pub mod sim;
pub mod stats;

#[cfg(test)]
mod test;
