pub mod list;
pub mod model;
pub mod plan;
pub mod run;
pub mod schema;
