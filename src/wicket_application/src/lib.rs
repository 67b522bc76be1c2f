pub mod use_cases;

pub use use_cases::{
    get_account::{GetAccountError, GetAccountUseCase},
    login::{LoginError, LoginUseCase},
    reset_password::{ResetPasswordError, ResetPasswordUseCase},
    update_account::{UpdateAccountError, UpdateAccountUseCase},
};
