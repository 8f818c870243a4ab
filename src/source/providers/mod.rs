mod randomuser;

pub use randomuser::RandomUserSource;
