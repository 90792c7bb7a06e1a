mod director;

pub use director::Director;
