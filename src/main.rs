use clap::Parser;
use course_signup::config::cli::{Command, SubmitArgs};
use course_signup::core::validator;
use course_signup::domain::ports::SubmissionClient;
use course_signup::presentation::{LandingPage, StatusBanner};
use course_signup::utils::logger;
use course_signup::{
    CliConfig, Field, FieldEdit, FieldState, FormController, FormStatus, SignupError,
    SignupRequest, SignupSettings, WebhookClient,
};
use std::io::{self, BufRead, Write};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if let Command::Page = cli.command {
        logger::init_cli_logger(cli.verbose);
        LandingPage::default().render(&mut io::stdout().lock())?;
        return Ok(());
    }

    let settings = match cli.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(cli.verbose);
            fail(&e);
        }
    };

    logger::init_logger(settings.log_format, settings.verbose);
    tracing::info!("Starting course-signup");
    tracing::debug!("Settings: {:?}", settings);

    let result = match &cli.command {
        Command::Submit(args) => submit_once(&settings, args).await,
        Command::Interactive => run_interactive(&settings).await,
        Command::Page => Ok(()),
    };

    if let Err(e) = result {
        fail(&e);
    }
    Ok(())
}

fn fail(e: &SignupError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}

async fn submit_once(settings: &SignupSettings, args: &SubmitArgs) -> course_signup::Result<()> {
    let request = SignupRequest::from(args);
    let validation = validator::validate(&request);
    for (field, message) in validation.iter() {
        eprintln!("  {}: {}", field.label(), message);
    }
    validation.into_result()?;

    let mut form = FormController::new(WebhookClient::new(settings)?);
    form.apply(FieldEdit::Name(request.name));
    form.apply(FieldEdit::Email(request.email));
    form.apply(FieldEdit::Phone(request.phone));
    form.apply(FieldEdit::Consent(request.gdpr_consent_and_updates));
    form.apply(FieldEdit::WantTips(request.want_tips));

    let status = send(&mut form).await?;
    match status {
        FormStatus::Error(reason) => Err(SignupError::SubmissionFailed { reason }),
        _ => Ok(()),
    }
}

async fn run_interactive(settings: &SignupSettings) -> course_signup::Result<()> {
    let page = LandingPage::default();
    let mut stdout = io::stdout().lock();
    page.render_above_form(&mut stdout)?;
    writeln!(stdout)?;
    drop(stdout);

    let mut input = io::stdin().lock();
    let mut form = FormController::new(WebhookClient::new(settings)?);

    'form: loop {
        for (field, label) in [
            (Field::Name, "Full Name"),
            (Field::Email, "Email Address"),
            (Field::Phone, "Phone Number (e.g. +43 123 456 7890)"),
        ] {
            loop {
                let Some(value) = prompt(&mut input, label)? else {
                    break 'form;
                };
                let edit = match field {
                    Field::Name => FieldEdit::Name(value),
                    Field::Email => FieldEdit::Email(value),
                    _ => FieldEdit::Phone(value),
                };
                form.apply(edit);
                match form.field_state(field) {
                    FieldState::Invalid(message) => println!("  ⚠ {}", message),
                    _ => break,
                }
            }
        }

        loop {
            let Some(consent) = confirm(
                &mut input,
                "I want to receive course updates and consent to data processing according to the Privacy Policy",
                false,
            )?
            else {
                break 'form;
            };
            form.apply(FieldEdit::Consent(consent));
            match form.field_state(Field::GdprConsentAndUpdates) {
                FieldState::Invalid(message) => println!("  ⚠ {}", message),
                _ => break,
            }
        }

        let Some(tips) = confirm(
            &mut input,
            "Send me AI productivity tips and study hacks by email",
            false,
        )?
        else {
            break 'form;
        };
        form.apply(FieldEdit::WantTips(tips));

        loop {
            let status = send(&mut form).await?;
            match status {
                FormStatus::Success => {
                    if confirm(&mut input, "Sign Up Another Student?", false)? == Some(true) {
                        form.dismiss();
                        continue 'form;
                    }
                    break 'form;
                }
                FormStatus::Error(_) => {
                    if confirm(&mut input, "Try again?", true)? != Some(true) {
                        break 'form;
                    }
                }
                FormStatus::Idle | FormStatus::Submitting => break 'form,
            }
        }
    }

    page.render_footer(&mut io::stdout().lock())?;
    Ok(())
}

/// Shows the progress banner while the webhook call is in flight.
async fn send<C: SubmissionClient>(form: &mut FormController<C>) -> course_signup::Result<FormStatus> {
    let ticket = form.begin_submission()?;
    print_banner(&form.status());
    io::stdout().flush()?;
    let result = form.client().submit(ticket.request()).await;
    let status = form.complete_submission(ticket, result);
    print_banner(&status);
    Ok(status)
}

fn print_banner(status: &FormStatus) {
    if let Some(banner) = StatusBanner::for_status(status) {
        println!("{}", banner.title);
        if !banner.message.is_empty() {
            println!("{}", banner.message);
        }
    }
}

/// Returns `None` once stdin is closed.
fn prompt<R: BufRead>(input: &mut R, label: &str) -> io::Result<Option<String>> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn confirm<R: BufRead>(input: &mut R, question: &str, default: bool) -> io::Result<Option<bool>> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    let Some(answer) = prompt(input, &format!("{} {}", question, hint))? else {
        return Ok(None);
    };
    Ok(Some(match answer.trim().to_lowercase().as_str() {
        "" => default,
        "y" | "yes" | "j" | "ja" => true,
        _ => false,
    }))
}
