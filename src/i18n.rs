//! UI language (English / French) and translated strings

use serde::{Deserialize, Serialize};

/// Display language
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Fr,
}

/// Locale environment variables, in lookup priority order
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

impl Lang {
    /// Parse a language code ("en", "fr", "fr-FR", "fr_FR.UTF-8"...).
    /// Only the primary subtag is considered.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .split(|c| c == '-' || c == '_' || c == '.')
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Lang::En),
            "fr" => Some(Lang::Fr),
            _ => None,
        }
    }

    /// Pick the language from a locale string: French for `fr*`, English otherwise
    pub fn from_locale(locale: &str) -> Self {
        match Self::from_code(locale) {
            Some(Lang::Fr) => Lang::Fr,
            _ => Lang::En,
        }
    }

    /// Detect from the process locale (first non-empty of LC_ALL, LC_MESSAGES, LANG)
    pub fn detect() -> Self {
        let locale = LOCALE_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|v| !v.is_empty());
        match locale {
            Some(l) => {
                log::debug!("locale detected: {}", l);
                Self::from_locale(&l)
            }
            None => Lang::En,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Lang::En => Lang::Fr,
            Lang::Fr => Lang::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fr => "fr",
        }
    }

    /// Label of the language switcher button (names the *other* language)
    pub fn switch_label(self) -> &'static str {
        match self {
            Lang::En => "Français",
            Lang::Fr => "English",
        }
    }

    /// Accessible label of the language switcher button
    pub fn switch_aria_label(self) -> &'static str {
        match self {
            Lang::En => "Switch to French",
            Lang::Fr => "Switch to English",
        }
    }
}

/// Keyboard panel strings
#[derive(Debug, Clone, Copy)]
pub struct KeyboardStrings {
    pub title: &'static str,
    pub instruction: &'static str,
    pub placeholder: &'static str,
    pub copy: &'static str,
    pub copied: &'static str,
    pub close: &'static str,
    pub external_keyboard: &'static str,
    pub examples: &'static str,
}

pub const EXTERNAL_KEYBOARD_URL: &str = "https://www.lexilogos.com/clavier/kabiye.htm";

pub fn keyboard_strings(lang: Lang) -> KeyboardStrings {
    match lang {
        Lang::En => KeyboardStrings {
            title: "Kabiyè Keyboard",
            instruction: "Type = followed by a letter to get the diacritical variant",
            placeholder: "Type your text here...",
            copy: "Copy",
            copied: "Copied!",
            close: "Close",
            external_keyboard: "Use Lexilogos Keyboard",
            examples: "Examples:",
        },
        Lang::Fr => KeyboardStrings {
            title: "Clavier Kabiyè",
            instruction: "Tapez = suivi d'une lettre pour obtenir la variante diacritique",
            placeholder: "Tapez votre texte ici...",
            copy: "Copier",
            copied: "Copié !",
            close: "Fermer",
            external_keyboard: "Utiliser le clavier Lexilogos",
            examples: "Exemples :",
        },
    }
}

/// Sample lesson card strings
#[derive(Debug, Clone, Copy)]
pub struct LessonStrings {
    pub title: &'static str,
    pub show_translation: &'static str,
    pub hide_translation: &'static str,
    pub next_word: &'static str,
}

pub fn lesson_strings(lang: Lang) -> LessonStrings {
    match lang {
        Lang::En => LessonStrings {
            title: "Learn Basic Greetings",
            show_translation: "Show Translation",
            hide_translation: "Hide Translation",
            next_word: "Next Word",
        },
        Lang::Fr => LessonStrings {
            title: "Apprenez les salutations de base",
            show_translation: "Afficher la traduction",
            hide_translation: "Masquer la traduction",
            next_word: "Mot suivant",
        },
    }
}

/// Newsletter box strings
#[derive(Debug, Clone, Copy)]
pub struct NewsletterStrings {
    pub title: &'static str,
    pub description: &'static str,
    pub placeholder: &'static str,
    pub button: &'static str,
    pub success: &'static str,
    pub error: &'static str,
}

pub fn newsletter_strings(lang: Lang) -> NewsletterStrings {
    match lang {
        Lang::En => NewsletterStrings {
            title: "Stay Updated",
            description: "Subscribe to our newsletter for the latest Kabiyè en poche updates and Kabiyè learning tips.",
            placeholder: "Enter your email",
            button: "Subscribe",
            success: "Thank you for subscribing!",
            error: "An error occurred. Please try again.",
        },
        Lang::Fr => NewsletterStrings {
            title: "Restez Informé",
            description: "Abonnez-vous à notre newsletter pour les dernières mises à jour de Kabiyè en poche et des conseils d'apprentissage du Kabiyè.",
            placeholder: "Entrez votre email",
            button: "S'abonner",
            success: "Merci de vous être abonné !",
            error: "Une erreur s'est produite. Veuillez réessayer.",
        },
    }
}

/// One card of the "why choose" section
#[derive(Debug, Clone, Copy)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
}

pub const GITHUB_URL: &str = "https://github.com/Kabiyè en poche/app";

/// Store badge labels; the badges are not translated
pub const STORE_BADGES: [&str; 2] = ["Get it on Google Play", "Download on the App Store"];

/// Landing page copy
#[derive(Debug, Clone, Copy)]
pub struct PageStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub discover_title: &'static str,
    pub discover_text: &'static str,
    pub features: [&'static str; 4],
    pub why_choose: &'static str,
    pub why_cards: [FeatureCard; 3],
    pub sample_lesson: &'static str,
    pub join_community: &'static str,
    pub community_text: &'static str,
    pub view_github: &'static str,
    pub join_us: &'static str,
    pub ready_to_start: &'static str,
    pub download_now: &'static str,
}

pub fn page_strings(lang: Lang) -> PageStrings {
    match lang {
        Lang::En => PageStrings {
            title: "Kabiyè en poche",
            subtitle: "Your gateway to the Kabiyè language and culture",
            discover_title: "Discover Kabiyè",
            discover_text: "Embark on a journey to learn Kabiyè, a vibrant language spoken by over 1 million people in Togo and beyond. Connect with a rich culture and open new doors of understanding.",
            features: [
                "Interactive lessons designed for mobile learning",
                "Native speaker audio for perfect pronunciation",
                "Cultural insights to deepen your understanding",
                "Gamified experience to keep you motivated",
            ],
            why_choose: "Why Choose Kabiyè en poche?",
            why_cards: [
                FeatureCard {
                    title: "Learn Anytime, Anywhere",
                    description: "Our mobile app lets you learn Kabiyè at your own pace, wherever you are.",
                },
                FeatureCard {
                    title: "Connect with Native Speakers",
                    description: "Practice with audio from native Kabiyè speakers to perfect your pronunciation.",
                },
                FeatureCard {
                    title: "Immerse in Culture",
                    description: "Go beyond language—dive into the rich cultural heritage of the Kabiyè people.",
                },
            ],
            sample_lesson: "Try a Sample Lesson",
            join_community: "Join Our Open Source Community",
            community_text: "Kabiyè en poche is an open-source project, and we welcome contributors from all backgrounds. Help us preserve and promote the Kabiyè language!",
            view_github: "View on GitHub",
            join_us: "Join Our Community",
            ready_to_start: "Ready to Start Your Kabiyè Journey?",
            download_now: "Download the Kabiyè en poche app now and join thousands of learners discovering the beauty of Kabiyè language and culture.",
        },
        Lang::Fr => PageStrings {
            title: "Kabiyè en poche",
            subtitle: "Votre passerelle vers la langue et la culture Kabiyè",
            discover_title: "Découvrez le Kabiyè",
            discover_text: "Embarquez pour un voyage d'apprentissage du Kabiyè, une langue vivante parlée par plus d'un million de personnes au Togo et au-delà. Connectez-vous à une riche culture et ouvrez de nouvelles portes de compréhension.",
            features: [
                "Leçons interactives conçues pour l'apprentissage mobile",
                "Audio de locuteurs natifs pour une prononciation parfaite",
                "Aperçus culturels pour approfondir votre compréhension",
                "Expérience ludique pour rester motivé",
            ],
            why_choose: "Pourquoi choisir Kabiyè en poche ?",
            why_cards: [
                FeatureCard {
                    title: "Apprenez n'importe quand, n'importe où",
                    description: "Notre application mobile vous permet d'apprendre le Kabiyè à votre rythme, où que vous soyez.",
                },
                FeatureCard {
                    title: "Connectez-vous avec des locuteurs natifs",
                    description: "Pratiquez avec l'audio de locuteurs natifs Kabiyè pour perfectionner votre prononciation.",
                },
                FeatureCard {
                    title: "Immergez-vous dans la culture",
                    description: "Allez au-delà de la langue - plongez dans le riche patrimoine culturel du peuple Kabiyè.",
                },
            ],
            sample_lesson: "Essayez une leçon d'exemple",
            join_community: "Rejoignez notre communauté Open Source",
            community_text: "Kabiyè en poche est un projet open-source, et nous accueillons les contributeurs de tous horizons. Aidez-nous à préserver et à promouvoir la langue Kabiyè !",
            view_github: "Voir sur GitHub",
            join_us: "Rejoignez notre communauté",
            ready_to_start: "Prêt à commencer votre voyage Kabiyè ?",
            download_now: "Téléchargez l'application Kabiyè en poche maintenant et rejoignez des milliers d'apprenants découvrant la beauté de la langue et de la culture Kabiyè.",
        },
    }
}
