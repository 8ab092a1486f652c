pub mod category;
pub mod member;
pub mod order;
pub mod sweet;
