use crate::config::CardConfig;
use crate::domain::model::{AcceptedContact, CardFact, CardSection, MessageCard};
use chrono::{DateTime, TimeZone};

pub const NO_MESSAGE_PLACEHOLDER: &str = "No message provided";
pub const CONSENT_AGREED: &str = "✅ Agreed";

const SUBTITLE_FORMAT: &str = "%B %d, %Y at %I:%M %p";

/// Builds the fixed-shape notification card for one accepted contact.
pub fn build_card<Tz>(contact: &AcceptedContact, branding: &CardConfig, at: &DateTime<Tz>) -> MessageCard
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let facts = vec![
        fact("Name", &contact.name),
        fact("Email", &contact.email),
        fact("Mobile", &contact.mobile),
        fact("Interest", &contact.interest),
        fact("Message", contact.message.as_deref().unwrap_or(NO_MESSAGE_PLACEHOLDER)),
        fact("Consent", CONSENT_AGREED),
    ];

    MessageCard {
        card_type: "MessageCard".to_string(),
        context: "http://schema.org/extensions".to_string(),
        theme_color: branding.theme_color.clone(),
        summary: branding.summary.clone(),
        sections: vec![CardSection {
            activity_title: branding.activity_title.clone(),
            activity_subtitle: at.format(SUBTITLE_FORMAT).to_string(),
            facts,
            markdown: true,
        }],
    }
}

fn fact(name: &str, value: &str) -> CardFact {
    CardFact {
        name: name.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn contact() -> AcceptedContact {
        AcceptedContact {
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            mobile: "+91 98765-43210".into(),
            interest: "Payroll".into(),
            message: None,
        }
    }

    #[test]
    fn test_card_has_six_facts_in_order() {
        let at = Utc.with_ymd_and_hms(2026, 3, 7, 14, 5, 0).unwrap();
        let card = build_card(&contact(), &CardConfig::default(), &at);

        let section = &card.sections[0];
        let names: Vec<&str> = section.facts.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Name", "Email", "Mobile", "Interest", "Message", "Consent"]);
        assert_eq!(section.facts[4].value, NO_MESSAGE_PLACEHOLDER);
        assert_eq!(section.facts[5].value, CONSENT_AGREED);
        assert!(section.markdown);
    }

    #[test]
    fn test_subtitle_uses_long_date_and_twelve_hour_clock() {
        let at = Utc.with_ymd_and_hms(2026, 3, 7, 14, 5, 0).unwrap();
        let card = build_card(&contact(), &CardConfig::default(), &at);
        assert_eq!(card.sections[0].activity_subtitle, "March 07, 2026 at 02:05 PM");
    }

    #[test]
    fn test_branding_and_message_flow_into_card() {
        let mut with_message = contact();
        with_message.message = Some("Call after 5pm".into());
        let branding = CardConfig {
            theme_color: "112233".into(),
            summary: "Leads".into(),
            activity_title: "New lead".into(),
        };
        let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

        let card = build_card(&with_message, &branding, &at);
        assert_eq!(card.theme_color, "112233");
        assert_eq!(card.summary, "Leads");
        assert_eq!(card.sections[0].activity_title, "New lead");
        assert_eq!(card.sections[0].facts[4].value, "Call after 5pm");
    }
}
