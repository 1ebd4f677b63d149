// Domain layer: the component model extracted from the description and the
// seam traits the generator is wired through.

pub mod model;
pub mod ports;
