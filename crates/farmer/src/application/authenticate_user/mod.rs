mod authenticate_user_command;
mod authenticate_user_response;
mod authenticate_user_use_case;

pub use authenticate_user_command::AuthenticateUserCommand;
pub use authenticate_user_response::AuthenticatedUserResponse;
pub use authenticate_user_use_case::AuthenticateUserUseCase;
