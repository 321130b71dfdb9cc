mod lifo;

pub use lifo::LifoReplacer;
