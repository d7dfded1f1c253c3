use clap::Parser;
use contact_relay::form::{ContactForm, FormController, HttpContactApi, MessageKind};
use contact_relay::utils::logger;
use contact_relay::SubmitArgs;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = SubmitArgs::parse();
    logger::init_cli_logger(args.verbose);

    let api = HttpContactApi::new(&args.endpoint)?;
    tracing::debug!("Submitting to {}", api.endpoint());

    let form = ContactForm {
        name: args.name,
        email: args.email,
        mobile: args.mobile,
        interest: args.interest,
        message: args.message,
        consent: args.consent,
    };

    let mut controller = FormController::new(api).with_form(form);
    let message = controller.submit().await;

    match message.kind {
        MessageKind::Success => {
            println!("✅ {}", message.text);
            Ok(())
        }
        MessageKind::Error => {
            eprintln!("❌ {}", message.text);
            std::process::exit(1);
        }
    }
}
