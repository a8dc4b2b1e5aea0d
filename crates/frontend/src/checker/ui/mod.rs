mod contact;
mod modals;
mod origin;
mod page;
mod products;

pub use page::CheckerPage;
