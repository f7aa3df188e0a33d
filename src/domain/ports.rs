use crate::domain::model::{ColumnMap, RecordTable, TransformResult};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    /// Sample size token, copied into the `N` column without parsing.
    fn n_samples(&self) -> &str;
    fn output_path(&self) -> &str;
    fn columns(&self) -> &ColumnMap;
}

pub trait Pipeline {
    fn extract(&self) -> Result<RecordTable>;
    fn transform(&self, table: RecordTable) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<String>;
}
