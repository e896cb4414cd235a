//! Canonical fallback content. Pure functions, no I/O: used by the store
//! whenever the persisted document is missing or malformed, and by tests
//! as the reference document.

use std::collections::BTreeMap;

use crate::i18n::Bilingual;
use crate::services::definitions;

use super::types::{
    ContactContent, ContentDocument, HomeContent, HowItWorksContent, HowItWorksStep,
    ServiceItemOverride, ServicesPageContent, Slide,
};

pub fn default_document() -> ContentDocument {
    ContentDocument {
        home: default_home(),
        services_page: default_services_page(),
        services_items: default_service_items(),
        how_it_works: default_how_it_works(),
        contact: default_contact(),
    }
}

pub fn default_home() -> HomeContent {
    HomeContent {
        title: Bilingual::new(
            "Digitalhilfe — IT-Hilfe im Ehrenamt",
            "Digitalhilfe — volunteer IT help",
        ),
        description: Bilingual::new(
            "Wir unterstützen Vereine und Privatpersonen ehrenamtlich bei Fragen \
             rund um Computer, Internet und Smartphone.",
            "We are volunteers supporting clubs and individuals with computers, \
             the internet and smartphones.",
        ),
        services_button: Bilingual::new("Unsere Angebote", "Our services"),
        contact_button: Bilingual::new("Kontakt aufnehmen", "Get in touch"),
        slideshow_items: default_slides(),
    }
}

pub fn default_slides() -> Vec<Slide> {
    vec![
        Slide {
            id: 1,
            image_url: "/static/img/slides/help.jpg".to_string(),
            image_hint: "volunteer helping at a laptop".to_string(),
            alt: Bilingual::new(
                "Ehrenamtliche Hilfe am Laptop",
                "Volunteer helping at a laptop",
            ),
            title: Bilingual::new("Hilfe, die ankommt", "Help that arrives"),
            description: Bilingual::new(
                "Unsere Ehrenamtlichen nehmen sich Zeit für eure Fragen.",
                "Our volunteers take time for your questions.",
            ),
            cta_text: Bilingual::new("Mehr erfahren", "Learn more"),
            cta_link: Some("/how-it-works".to_string()),
        },
        Slide {
            id: 2,
            image_url: "/static/img/slides/clubs.jpg".to_string(),
            image_hint: "club members in a meeting".to_string(),
            alt: Bilingual::new(
                "Vereinsmitglieder bei einem Treffen",
                "Club members in a meeting",
            ),
            title: Bilingual::new("Für Vereine", "For clubs"),
            description: Bilingual::new(
                "Website, Mitgliederverwaltung, Datensicherung — wir packen mit an.",
                "Website, member management, backups — we lend a hand.",
            ),
            cta_text: Bilingual::new("Angebote für Vereine", "Services for clubs"),
            cta_link: Some("/services".to_string()),
        },
        Slide {
            id: 3,
            image_url: "/static/img/slides/contact.jpg".to_string(),
            image_hint: "person writing an email".to_string(),
            alt: Bilingual::new("Person schreibt eine E-Mail", "Person writing an email"),
            title: Bilingual::new("Einfach anfragen", "Just ask"),
            description: Bilingual::new(
                "Schreibt uns über das Kontaktformular — wir melden uns.",
                "Write to us via the contact form — we will get back to you.",
            ),
            cta_text: Bilingual::new("Zum Kontaktformular", "To the contact form"),
            cta_link: Some("/contact".to_string()),
        },
    ]
}

pub fn default_services_page() -> ServicesPageContent {
    ServicesPageContent {
        title: Bilingual::new("Unsere Angebote", "Our services"),
        description: Bilingual::new(
            "Kostenlose, ehrenamtliche Unterstützung — wählt aus, was zu euch passt.",
            "Free, volunteer-run support — pick what fits you.",
        ),
        clubs_title: Bilingual::new("Für Vereine", "For clubs"),
        clubs_description: Bilingual::new(
            "Unterstützung für gemeinnützige Vereine und Initiativen.",
            "Support for non-profit clubs and initiatives.",
        ),
        individuals_title: Bilingual::new("Für Privatpersonen", "For individuals"),
        individuals_description: Bilingual::new(
            "Geduldige Hilfe im Alltag mit Computer und Smartphone.",
            "Patient everyday help with computers and smartphones.",
        ),
    }
}

/// Default overrides mirror the compiled-in definitions with the non-text
/// attributes (icon, category, slug) stripped, so the admin editor always
/// has a complete text record per service to start from.
pub fn default_service_items() -> BTreeMap<String, ServiceItemOverride> {
    definitions::all()
        .into_iter()
        .map(|def| {
            let item = ServiceItemOverride {
                title: def.title,
                short_description: def.short_description,
                long_description: def.long_description,
                image_url: def.image_url.to_string(),
                image_hint: def.image_hint.to_string(),
            };
            (def.slug.to_string(), item)
        })
        .collect()
}

pub fn default_how_it_works() -> HowItWorksContent {
    HowItWorksContent {
        title: Bilingual::new("So funktioniert's", "How it works"),
        intro: Bilingual::new(
            "Von der Anfrage bis zur Hilfe vor Ort in drei einfachen Schritten.",
            "From your request to hands-on help in three simple steps.",
        ),
        steps: vec![
            HowItWorksStep {
                title: Bilingual::new("1. Anfrage stellen", "1. Send a request"),
                description: Bilingual::new(
                    "Beschreibt euer Anliegen über das Kontaktformular oder ruft uns an.",
                    "Describe your problem via the contact form or give us a call.",
                ),
            },
            HowItWorksStep {
                title: Bilingual::new("2. Wir melden uns", "2. We get back to you"),
                description: Bilingual::new(
                    "Eine Ehrenamtliche oder ein Ehrenamtlicher mit passenden \
                     Kenntnissen übernimmt eure Anfrage.",
                    "A volunteer with the right skills takes on your request.",
                ),
            },
            HowItWorksStep {
                title: Bilingual::new("3. Gemeinsam lösen", "3. Solve it together"),
                description: Bilingual::new(
                    "Wir helfen vor Ort oder per Videoanruf — so lange, bis es läuft.",
                    "We help in person or via video call — until it works.",
                ),
            },
        ],
    }
}

pub fn default_contact() -> ContactContent {
    ContactContent {
        title: Bilingual::new("Kontakt", "Contact"),
        description: Bilingual::new(
            "Schreibt uns — wir antworten in der Regel innerhalb weniger Tage.",
            "Write to us — we usually reply within a few days.",
        ),
        name_label: Bilingual::new("Name", "Name"),
        email_label: Bilingual::new("E-Mail-Adresse", "Email address"),
        subject_label: Bilingual::new("Betreff", "Subject"),
        message_label: Bilingual::new("Nachricht", "Message"),
        details_label: Bilingual::new(
            "Technische Angaben (optional)",
            "Technical details (optional)",
        ),
        submit_label: Bilingual::new("Absenden", "Send"),
        phone: "+49 30 555 0199".to_string(),
    }
}
