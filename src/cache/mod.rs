mod memo;

pub use memo::MemoStore;
