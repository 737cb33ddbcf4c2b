mod common;
mod history;
mod routing;
mod service;
