use crate::i18n::Bilingual;

/// Who a service is aimed at. Drives the grouping on the services page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceCategory {
    Clubs,
    Individuals,
}

/// Compiled-in description of one offered service. Structure (slug, category,
/// icon) is not editable; only the text fields can be overridden through the
/// admin editor.
#[derive(Debug, Clone)]
pub struct ServiceDefinition {
    pub slug: &'static str,
    pub category: ServiceCategory,
    /// Name of the icon rendered next to the service, resolved by the templates.
    pub icon: &'static str,
    pub title: Bilingual,
    pub short_description: Bilingual,
    pub long_description: Bilingual,
    pub image_url: &'static str,
    pub image_hint: &'static str,
}

/// All offered services in display order. The services page and the merge
/// layer iterate this list, never the persisted overrides.
pub fn all() -> Vec<ServiceDefinition> {
    vec![
        ServiceDefinition {
            slug: "vereins-website",
            category: ServiceCategory::Clubs,
            icon: "globe",
            title: Bilingual::new("Vereinswebsite", "Club website"),
            short_description: Bilingual::new(
                "Wir helfen beim Aufbau und der Pflege eurer Vereinswebsite.",
                "We help you build and maintain your club's website.",
            ),
            long_description: Bilingual::new(
                "Von der ersten Seite bis zur laufenden Pflege: Wir richten eine \
                 einfache, wartbare Website für euren Verein ein und zeigen euch, \
                 wie ihr Inhalte selbst aktualisiert.",
                "From the first page to ongoing upkeep: we set up a simple, \
                 maintainable website for your club and show you how to update \
                 content yourselves.",
            ),
            image_url: "/static/img/services/website.jpg",
            image_hint: "laptop showing a website",
        },
        ServiceDefinition {
            slug: "mitgliederverwaltung",
            category: ServiceCategory::Clubs,
            icon: "users",
            title: Bilingual::new("Mitgliederverwaltung", "Member management"),
            short_description: Bilingual::new(
                "Beratung zu Software für Mitglieder, Beiträge und Kommunikation.",
                "Advice on software for members, fees and communication.",
            ),
            long_description: Bilingual::new(
                "Wir vergleichen mit euch passende Werkzeuge für Mitgliederlisten, \
                 Beitragsverwaltung und Rundmails und begleiten die Einführung im \
                 Verein.",
                "Together we compare suitable tools for member lists, fee \
                 management and newsletters, and accompany the rollout in your \
                 club.",
            ),
            image_url: "/static/img/services/members.jpg",
            image_hint: "people around a table",
        },
        ServiceDefinition {
            slug: "datensicherung",
            category: ServiceCategory::Clubs,
            icon: "shield",
            title: Bilingual::new("Datensicherung & Datenschutz", "Backups & data protection"),
            short_description: Bilingual::new(
                "Grundlagen zu Backups und Datenschutz für Vereinsdaten.",
                "Basics of backups and data protection for club data.",
            ),
            long_description: Bilingual::new(
                "Wir richten mit euch eine einfache Sicherungsroutine ein und \
                 erklären, was der Verein beim Umgang mit Mitgliederdaten beachten \
                 muss.",
                "We set up a simple backup routine with you and explain what a \
                 club needs to consider when handling member data.",
            ),
            image_url: "/static/img/services/backup.jpg",
            image_hint: "external hard drive",
        },
        ServiceDefinition {
            slug: "smartphone-hilfe",
            category: ServiceCategory::Individuals,
            icon: "smartphone",
            title: Bilingual::new("Smartphone & Tablet", "Smartphone & tablet"),
            short_description: Bilingual::new(
                "Geduldige Hilfe bei der Einrichtung und Bedienung eures Geräts.",
                "Patient help setting up and using your device.",
            ),
            long_description: Bilingual::new(
                "Ob neues Handy oder vertrautes Tablet: Wir nehmen uns Zeit, \
                 beantworten Fragen und üben die wichtigsten Handgriffe gemeinsam.",
                "Whether a new phone or a familiar tablet: we take our time, \
                 answer questions and practice the most important steps together.",
            ),
            image_url: "/static/img/services/smartphone.jpg",
            image_hint: "hands holding a smartphone",
        },
        ServiceDefinition {
            slug: "email-einrichtung",
            category: ServiceCategory::Individuals,
            icon: "mail",
            title: Bilingual::new("E-Mail einrichten", "Email setup"),
            short_description: Bilingual::new(
                "Einrichtung eines E-Mail-Kontos auf all euren Geräten.",
                "Setting up an email account on all of your devices.",
            ),
            long_description: Bilingual::new(
                "Wir richten euer E-Mail-Konto auf Computer, Handy und Tablet ein \
                 und zeigen, wie ihr Anhänge verschickt und Spam erkennt.",
                "We set up your email account on computer, phone and tablet and \
                 show you how to send attachments and spot spam.",
            ),
            image_url: "/static/img/services/email.jpg",
            image_hint: "letter envelope on a screen",
        },
        ServiceDefinition {
            slug: "sicherheit-im-netz",
            category: ServiceCategory::Individuals,
            icon: "lock",
            title: Bilingual::new("Sicher im Internet", "Staying safe online"),
            short_description: Bilingual::new(
                "Tipps zu Passwörtern, Online-Banking und dem Erkennen von Betrug.",
                "Tips on passwords, online banking and recognizing scams.",
            ),
            long_description: Bilingual::new(
                "Wir erklären, wie gute Passwörter aussehen, worauf ihr beim \
                 Online-Banking achten solltet und wie ihr Betrugsversuche \
                 erkennt, bevor es teuer wird.",
                "We explain what good passwords look like, what to watch out for \
                 in online banking and how to recognize scams before they get \
                 expensive.",
            ),
            image_url: "/static/img/services/security.jpg",
            image_hint: "padlock on a keyboard",
        },
    ]
}

/// Lookup by slug, preserving the "unknown slug" case for the detail page.
pub fn find(slug: &str) -> Option<ServiceDefinition> {
    all().into_iter().find(|d| d.slug == slug)
}
