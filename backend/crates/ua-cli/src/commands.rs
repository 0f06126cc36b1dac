use clap::Subcommand;
use ua_core::{AuthService, Field};
use ua_forms::{FormState, FormValues, LoginForm, RegisterForm, Submission};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Log in with email and password
    Login {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },

    /// Create an account
    Register {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
        /// Must match --password; checked locally and never sent
        #[arg(long)]
        confirm_password: Option<String>,
    },
}

impl Commands {
    /// Fill the matching form and submit it. Arguments left out stay empty
    /// and are reported by the form validators, not by the argument parser.
    pub async fn run(self, service: &dyn AuthService) -> ua_core::Result<Submission> {
        match self {
            Commands::Login { email, password } => {
                let mut form = LoginForm::new();
                fill(&mut form, [(Field::Email, email), (Field::Password, password)])?;
                Ok(form.submit(service).await)
            }
            Commands::Register {
                name,
                email,
                password,
                confirm_password,
            } => {
                let mut form = RegisterForm::new();
                fill(
                    &mut form,
                    [
                        (Field::Name, name),
                        (Field::Email, email),
                        (Field::Password, password),
                        (Field::ConfirmPassword, confirm_password),
                    ],
                )?;
                Ok(form.submit(service).await)
            }
        }
    }
}

fn fill<V: FormValues, const N: usize>(
    form: &mut FormState<V>,
    entries: [(Field, Option<String>); N],
) -> ua_core::Result<()> {
    for (field, value) in entries {
        if let Some(value) = value {
            form.set(field, value)?;
        }
    }
    Ok(())
}
