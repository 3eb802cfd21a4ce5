//! Copy and imagery for the practice page. Fixed at build time.

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub icon: &'static str,
    /// Gradient shown over the image on hover.
    pub color: &'static str,
    pub text_color: &'static str,
}

#[derive(Clone, Copy, PartialEq)]
pub enum StatIcon {
    Award,
    Heart,
    Shield,
    Star,
}

impl StatIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            StatIcon::Award => "🏅",
            StatIcon::Heart => "❤",
            StatIcon::Shield => "🛡",
            StatIcon::Star => "★",
        }
    }
}

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub icon: StatIcon,
    pub color: &'static str,
}

pub struct Credential {
    pub highlight: &'static str,
    pub rest: &'static str,
    pub tone: &'static str,
}

pub struct OfficeHours {
    pub kind: &'static str,
    pub days: &'static str,
    pub hours: &'static str,
}

pub struct SessionFee {
    pub session: &'static str,
    pub price: &'static str,
}

pub const PRACTITIONER: &str = "Dr. Serena Blake";
pub const PRACTITIONER_TITLE: &str = "Licensed Clinical Psychologist";
pub const PORTRAIT_URL: &str = "https://img.freepik.com/free-photo/portrait-young-businesswoman-holding-eyeglasses-hand-against-gray-backdrop_23-2148020525.jpg?w=200&h=200&fit=crop&crop=face";

pub const PHONE: &str = "(323) 555-0192";
pub const EMAIL: &str = "serena@blakepsychology.com";
pub const ADDRESS_STREET: &str = "1287 Maplewood Drive";
pub const ADDRESS_CITY: &str = "Los Angeles, CA 90026";
pub const COPYRIGHT: &str = "© 2024 Dr. Serena Blake. All rights reserved.";

pub const BIO: &str = "is a licensed clinical psychologist (PsyD) based in Los Angeles, CA, with eight years of experience and over 500 client sessions. She blends evidence-based approaches—like cognitive-behavioral therapy and mindfulness—with compassionate, personalized care to help you overcome anxiety, strengthen relationships, and heal from trauma.";
pub const BIO_SETTING: &str = "Whether you meet in her Maplewood Drive office or connect virtually via Zoom, Dr. Blake is committed to creating a safe, supportive space for you to thrive.";
pub const CONTACT_INTRO: &str = "Ready to start your journey toward healing? Contact me to schedule a free consultation or ask any questions about my services.";

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "Do you accept insurance?",
        answer: "No, but a superbill is provided for self-submission to your insurance company.",
    },
    FaqEntry {
        question: "Are online sessions available?",
        answer: "Yes—all virtual sessions are conducted via Zoom on Mondays, Wednesdays, and Fridays from 1 PM to 5 PM.",
    },
    FaqEntry {
        question: "What is your cancellation policy?",
        answer: "A 24-hour notice is required for all session cancellations to avoid being charged the full session fee.",
    },
    FaqEntry {
        question: "How long are therapy sessions?",
        answer: "Individual sessions are 50 minutes, and couples sessions are 60 minutes.",
    },
    FaqEntry {
        question: "What can I expect in my first session?",
        answer: "Your first session will be a comprehensive assessment where we'll discuss your concerns, goals, and develop a personalized treatment plan.",
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Anxiety & Stress Management",
        description: "Learn evidence-based techniques to manage anxiety, reduce stress, and develop healthy coping mechanisms. I'll help you identify triggers and build resilience for a calmer, more balanced life.",
        image: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400&h=300&fit=crop&crop=center",
        icon: "🧘‍♀️",
        color: "linear-gradient(to top, #3b82f6, #06b6d4)",
        text_color: "text-gradient-primary",
    },
    Service {
        title: "Relationship Counseling",
        description: "Strengthen your relationships through improved communication, conflict resolution, and emotional intimacy. Whether you're dating, married, or navigating family dynamics, I provide a safe space for growth.",
        image: "https://images.unsplash.com/photo-1516589178581-6cd7833ae3b2?w=400&h=300&fit=crop&crop=center",
        icon: "💕",
        color: "linear-gradient(to top, #ec4899, #f43f5e)",
        text_color: "text-gradient-secondary",
    },
    Service {
        title: "Trauma Recovery",
        description: "Heal from past trauma with compassionate, trauma-informed therapy. Using proven techniques, I'll help you process difficult experiences and move toward post-traumatic growth and resilience.",
        image: "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?w=400&h=300&fit=crop&crop=center",
        icon: "🦋",
        color: "linear-gradient(to top, #a855f7, #6366f1)",
        text_color: "text-gradient-accent",
    },
];

pub const STATS: &[Stat] = &[
    Stat { number: "8+", label: "Years Experience", icon: StatIcon::Award, color: "text-gradient-primary" },
    Stat { number: "500+", label: "Sessions Completed", icon: StatIcon::Heart, color: "text-gradient-secondary" },
    Stat { number: "100%", label: "Confidential", icon: StatIcon::Shield, color: "text-gradient-accent" },
    Stat { number: "4.9", label: "Client Rating", icon: StatIcon::Star, color: "text-gradient-warm" },
];

pub const CREDENTIALS: &[Credential] = &[
    Credential { highlight: "8+ Years", rest: " Experience", tone: "blue" },
    Credential { highlight: "500+ Sessions", rest: "", tone: "purple" },
    Credential { highlight: "Licensed PsyD", rest: "", tone: "green" },
    Credential { highlight: "In-Person & Virtual", rest: "", tone: "orange" },
];

pub const OFFICE_HOURS: &[OfficeHours] = &[
    OfficeHours { kind: "In-Person", days: "(Tue & Thu)", hours: "10 AM – 6 PM" },
    OfficeHours { kind: "Virtual via Zoom", days: "(Mon, Wed & Fri)", hours: "1 PM – 5 PM" },
];

pub const SESSION_FEES: &[SessionFee] = &[
    SessionFee { session: "Individual Session", price: "$200" },
    SessionFee { session: "Couples Session", price: "$240" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_have_expected_sizes() {
        assert_eq!(FAQS.len(), 5);
        assert_eq!(SERVICES.len(), 3);
        assert_eq!(STATS.len(), 4);
        assert_eq!(CREDENTIALS.len(), 4);
        assert_eq!(OFFICE_HOURS.len(), 2);
        assert_eq!(SESSION_FEES.len(), 2);
    }

    #[test]
    fn no_blank_copy() {
        assert!(FAQS.iter().all(|f| !f.question.is_empty() && !f.answer.is_empty()));
        assert!(SERVICES.iter().all(|s| s.image.starts_with("https://") && !s.description.is_empty()));
    }
}
