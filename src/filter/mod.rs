// Filter domain: the shared name-to-spec mapping and its pixel transform.

pub mod apply;
pub mod name;
pub mod spec;

pub use name::FilterName;
pub use spec::FilterSpec;
