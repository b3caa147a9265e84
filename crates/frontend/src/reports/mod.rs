pub mod exports;
pub mod missing_goods;
