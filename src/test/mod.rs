mod accounting;
mod queues;
mod simulator;
