pub mod etl;
pub mod pipeline;
pub mod report;
pub mod validate;

pub use crate::domain::model::{
    DomainAggregate, DomainCount, ImportResult, InvalidRow, RawRow, SortMode,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
