pub mod all;
pub mod ev;
pub mod fd;
pub mod ft;
pub mod ix;
pub mod lv;
