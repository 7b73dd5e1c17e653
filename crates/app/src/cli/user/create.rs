use clap::Args;
use fleet_app::{
    auth::{PgAuthService, UserRegistration},
    database::{self, Db},
    domain::users::records::{Department, Role},
};

#[derive(Debug, Args)]
pub(crate) struct CreateUserArgs {
    /// Display name
    #[arg(long)]
    name: String,

    /// Login e-mail, unique among active users
    #[arg(long)]
    email: String,

    /// admin, fleet_manager, mechanic or driver
    #[arg(long)]
    role: Role,

    /// administration, operations or maintenance
    #[arg(long)]
    department: Department,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateUserArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url, 1)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let registered = PgAuthService::new(Db::new(pool))
        .register_user(UserRegistration {
            name: args.name,
            email: args.email,
            role: args.role,
            department: args.department,
        })
        .await
        .map_err(|error| format!("failed to create user: {error}"))?;

    println!("user_uuid: {}", registered.user.uuid);
    println!("user_email: {}", registered.user.email);
    println!("user_role: {}", registered.user.role);
    println!("bearer_token: {}", registered.token.as_str());
    println!("store this token now; it is only shown once");

    Ok(())
}
