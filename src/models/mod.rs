pub mod feature;
pub mod series;
pub mod template;
pub mod trend;
pub mod well;

pub use feature::*;
pub use series::*;
pub use template::*;
pub use trend::*;
pub use well::*;
