mod helpers;

mod account;
mod container;
mod login;
mod password_reset;
mod postgres;
