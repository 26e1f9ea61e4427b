use serde::Serialize;

/// One contact form submission, captured from the inputs at submit time and
/// dropped once validation and feedback are done.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub interest: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Validation {
    /// Messages in field check order: name, email, phone, interest, message.
    pub errors: Vec<String>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Checks every rule regardless of earlier failures so the user sees the full
/// list at once. A missing field is just an empty string, never an error type.
pub fn validate(form: &ContactForm) -> Validation {
    let mut errors = Vec::new();

    if form.name.trim().chars().count() < 2 {
        errors.push("Please enter a valid name (at least 2 characters)".to_string());
    }

    if !is_valid_email(&form.email) {
        errors.push("Please enter a valid email address".to_string());
    }

    if !is_valid_phone(&form.phone) {
        errors.push("Please enter a valid phone number".to_string());
    }

    if form.interest.is_empty() {
        errors.push("Please select your area of interest".to_string());
    }

    if form.message.trim().chars().count() < 10 {
        errors.push("Please enter a message (at least 10 characters)".to_string());
    }

    Validation { errors }
}

// local@domain.tld: no whitespace, a single '@', and the domain carries a dot
// with at least one character on each side.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let (local, domain) = match value.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

// Spaces, hyphens and parentheses are presentation and get stripped first;
// what remains must be an optional '+' then 1-16 digits, first digit nonzero.
fn is_valid_phone(value: &str) -> bool {
    let normalized: String = value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    let digits = normalized.strip_prefix('+').unwrap_or(&normalized);
    if digits.is_empty() || digits.len() > 16 {
        return false;
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    !digits.starts_with('0')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Jo".to_string(),
            email: "a@b.co".to_string(),
            phone: "5551234567".to_string(),
            interest: "robotics".to_string(),
            message: "this is long enough".to_string(),
        }
    }

    #[test]
    fn accepts_a_fully_valid_submission() {
        let result = validate(&valid_form());
        assert!(result.is_valid());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn rejects_everything_at_once_in_field_order() {
        let result = validate(&ContactForm {
            name: "J".to_string(),
            email: "bad".to_string(),
            phone: "0".to_string(),
            interest: String::new(),
            message: "short".to_string(),
        });
        assert!(!result.is_valid());
        assert_eq!(result.errors.len(), 5);
        assert!(result.errors[0].contains("name"));
        assert!(result.errors[1].contains("email"));
        assert!(result.errors[2].contains("phone"));
        assert!(result.errors[3].contains("interest"));
        assert!(result.errors[4].contains("message"));
    }

    #[test]
    fn name_needs_two_characters_after_trimming() {
        let mut form = valid_form();
        form.name = "  Jo  ".to_string();
        assert!(validate(&form).is_valid());

        form.name = " J ".to_string();
        assert!(!validate(&form).is_valid());

        form.name = String::new();
        assert!(!validate(&form).is_valid());
    }

    #[test]
    fn email_requires_local_at_domain_tld() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@school.example.org"));

        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn phone_normalizes_punctuation_before_matching() {
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(is_valid_phone("5551234567"));
        assert!(is_valid_phone("+358454901522"));

        assert!(!is_valid_phone("0123"));
        assert!(!is_valid_phone("+0123"));
        assert!(!is_valid_phone("abc"));
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("+"));
        // 17 digits is one past the cap
        assert!(!is_valid_phone("12345678901234567"));
        assert!(is_valid_phone("1234567890123456"));
    }

    #[test]
    fn interest_must_be_selected() {
        let mut form = valid_form();
        form.interest = String::new();
        let result = validate(&form);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("interest"));
    }

    #[test]
    fn message_needs_ten_characters_after_trimming() {
        let mut form = valid_form();
        form.message = "   exactly 10   ".to_string();
        assert!(validate(&form).is_valid());

        form.message = "nine char".to_string();
        assert!(!validate(&form).is_valid());
    }

    #[test]
    fn rules_are_independent() {
        // A bad email alone must not hide the other fields' results.
        let mut form = valid_form();
        form.email = "nope".to_string();
        form.phone = "0".to_string();
        let result = validate(&form);
        assert_eq!(result.errors.len(), 2);
        assert!(result.errors[0].contains("email"));
        assert!(result.errors[1].contains("phone"));
    }
}
