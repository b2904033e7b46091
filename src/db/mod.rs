pub mod db;
pub mod leaves;
pub mod records;
