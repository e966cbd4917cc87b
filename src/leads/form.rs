use serde::{Deserialize, Serialize};

/// Which contact form a submission came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Investor,
    Seller,
    General,
}

impl FormKind {
    pub fn slug(self) -> &'static str {
        match self {
            FormKind::Investor => "investor",
            FormKind::Seller => "seller",
            FormKind::General => "general",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "investor" => Some(FormKind::Investor),
            "seller" => Some(FormKind::Seller),
            "general" => Some(FormKind::General),
            _ => None,
        }
    }

    /// Fields shown on this form, in display order
    pub fn fields(self) -> Vec<FieldSpec> {
        let mut fields = vec![
            FieldSpec::text("firstName", "first_name").required(),
            FieldSpec::text("lastName", "last_name").required(),
            FieldSpec::new("email", "email", InputKind::Email).required(),
            FieldSpec::new("phone", "phone", InputKind::Tel).required(),
            FieldSpec::select("country", "country", "select_country", COUNTRY_OPTIONS).required(),
        ];

        match self {
            FormKind::Investor => {
                fields.push(FieldSpec::select(
                    "investmentType",
                    "investment_type",
                    "select_investment",
                    INVESTMENT_OPTIONS,
                ));
                fields.push(FieldSpec::text("budget", "budget").placeholder("budget_placeholder"));
            }
            FormKind::Seller => {
                fields.push(FieldSpec::text("propertyLocation", "property_location").required());
                fields.push(FieldSpec::select(
                    "propertyType",
                    "property_type",
                    "select_investment",
                    SELLER_PROPERTY_OPTIONS,
                ));
                fields.push(
                    FieldSpec::text("propertyValue", "property_value").placeholder("budget_placeholder"),
                );
            }
            FormKind::General => {}
        }

        fields.push(
            FieldSpec::new("message", "message", InputKind::Textarea).placeholder("message_placeholder"),
        );
        fields
    }
}

/// Choice value and the `contact_form` key of its label
pub type FieldOption = (&'static str, &'static str);

const COUNTRY_OPTIONS: &[FieldOption] = &[("IL", "israel"), ("US", "usa"), ("OTHER", "other")];

const INVESTMENT_OPTIONS: &[FieldOption] = &[
    ("residential", "residential"),
    ("commercial", "commercial"),
    ("land", "land"),
    ("mixed", "mixed"),
];

const SELLER_PROPERTY_OPTIONS: &[FieldOption] = &[
    ("residential", "residential"),
    ("commercial", "commercial"),
    ("land", "land"),
];

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Select,
    Textarea,
}

/// Static description of one form field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label_key: &'static str,
    pub input: InputKind,
    pub required: bool,
    pub placeholder_key: Option<&'static str>,
    pub options: &'static [FieldOption],
}

impl FieldSpec {
    fn new(name: &'static str, label_key: &'static str, input: InputKind) -> Self {
        Self {
            name,
            label_key,
            input,
            required: false,
            placeholder_key: None,
            options: &[],
        }
    }

    fn text(name: &'static str, label_key: &'static str) -> Self {
        Self::new(name, label_key, InputKind::Text)
    }

    fn select(
        name: &'static str,
        label_key: &'static str,
        placeholder_key: &'static str,
        options: &'static [FieldOption],
    ) -> Self {
        Self {
            options,
            ..Self::new(name, label_key, InputKind::Select).placeholder(placeholder_key)
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn placeholder(mut self, key: &'static str) -> Self {
        self.placeholder_key = Some(key);
        self
    }
}

/// Contact form as posted by the browser. Every field is free text until
/// [`ContactFormSubmission::validate`] has looked at it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactFormSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub investment_type: String,
    pub budget: String,
    pub property_location: String,
    pub property_type: String,
    pub property_value: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldProblem {
    Required,
    InvalidEmail,
    InvalidChoice,
}

impl FieldProblem {
    /// Key of the visitor-facing message in the `contact_form` context
    pub fn message_key(self) -> &'static str {
        match self {
            FieldProblem::Required => "required",
            FieldProblem::InvalidEmail => "invalid_email",
            FieldProblem::InvalidChoice => "invalid_choice",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub problem: FieldProblem,
}

impl ContactFormSubmission {
    /// Raw value of a field by its wire name
    pub fn value(&self, name: &str) -> &str {
        match name {
            "firstName" => &self.first_name,
            "lastName" => &self.last_name,
            "email" => &self.email,
            "phone" => &self.phone,
            "country" => &self.country,
            "investmentType" => &self.investment_type,
            "budget" => &self.budget,
            "propertyLocation" => &self.property_location,
            "propertyType" => &self.property_type,
            "propertyValue" => &self.property_value,
            "message" => &self.message,
            _ => "",
        }
    }

    /// Check the constraints a browser enforces before it lets the form submit:
    /// required fields, email shape, and select values from the option list.
    pub fn validate(&self, kind: FormKind) -> Result<(), Vec<FieldError>> {
        let errors: Vec<FieldError> = kind
            .fields()
            .iter()
            .filter_map(|field| {
                let value = self.value(field.name).trim();
                let problem = if value.is_empty() {
                    field.required.then_some(FieldProblem::Required)
                } else if field.input == InputKind::Email && !looks_like_email(value) {
                    Some(FieldProblem::InvalidEmail)
                } else if field.input == InputKind::Select
                    && !field.options.iter().any(|(v, _)| *v == value)
                {
                    Some(FieldProblem::InvalidChoice)
                } else {
                    None
                };
                problem.map(|problem| FieldError {
                    field: field.name,
                    problem,
                })
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// Same shape check as `<input type="email">`: one `@`, non-empty local part,
// dotless domains allowed, no whitespace.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}
