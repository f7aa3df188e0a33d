pub mod etl;
pub mod number;
pub mod pipeline;

pub use crate::domain::model::{FormattedRecord, RecordTable, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
