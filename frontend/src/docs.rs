//! Content of the API documentation page.
//!
//! The REST API described here does not exist in this project; these are
//! strings to display and copy, nothing more.

/// HTTP verb badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            HttpMethod::Get => "badge badge-secondary",
            HttpMethod::Post => "badge badge-default",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub path: &'static str,
    pub description: &'static str,
    pub auth: bool,
}

pub const ENDPOINTS: [Endpoint; 4] = [
    Endpoint {
        method: HttpMethod::Post,
        path: "/api/quality-check",
        description: "Analyze dataset quality",
        auth: true,
    },
    Endpoint {
        method: HttpMethod::Get,
        path: "/api/results/{id}",
        description: "Get analysis results",
        auth: true,
    },
    Endpoint {
        method: HttpMethod::Post,
        path: "/api/batch-upload",
        description: "Upload dataset for batch processing",
        auth: true,
    },
    Endpoint {
        method: HttpMethod::Get,
        path: "/api/health",
        description: "API health check",
        auth: false,
    },
];

/// Languages of the request examples, in tab order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CodeLanguage {
    #[default]
    Curl,
    JavaScript,
    Python,
}

impl CodeLanguage {
    pub const ALL: [CodeLanguage; 3] = [
        CodeLanguage::Curl,
        CodeLanguage::JavaScript,
        CodeLanguage::Python,
    ];

    /// Label of the tab trigger.
    pub fn tab_label(&self) -> &'static str {
        match self {
            CodeLanguage::Curl => "cURL",
            CodeLanguage::JavaScript => "JavaScript",
            CodeLanguage::Python => "Python",
        }
    }

    /// Card title, e.g. "Example Request - Javascript".
    pub fn title(&self) -> String {
        let key = match self {
            CodeLanguage::Curl => "curl",
            CodeLanguage::JavaScript => "javascript",
            CodeLanguage::Python => "python",
        };
        let mut chars = key.chars();
        let capitalized: String = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        format!("Example Request - {}", capitalized)
    }

    pub fn snippet(&self) -> &'static str {
        match self {
            CodeLanguage::Curl => CURL_EXAMPLE,
            CodeLanguage::JavaScript => JAVASCRIPT_EXAMPLE,
            CodeLanguage::Python => PYTHON_EXAMPLE,
        }
    }
}

pub const CURL_EXAMPLE: &str = r#"curl -X POST https://api.cancerqc.com/quality-check \
  -H "Authorization: Bearer YOUR_API_KEY" \
  -H "Content-Type: application/json" \
  -d '{
    "dataset_url": "https://example.com/dataset.csv",
    "schema_version": "v1.0",
    "options": {
      "check_demographics": true,
      "strict_validation": false
    }
  }'"#;

pub const JAVASCRIPT_EXAMPLE: &str = r#"const response = await fetch('https://api.cancerqc.com/quality-check', {
  method: 'POST',
  headers: {
    'Authorization': 'Bearer YOUR_API_KEY',
    'Content-Type': 'application/json'
  },
  body: JSON.stringify({
    dataset_url: 'https://example.com/dataset.csv',
    schema_version: 'v1.0',
    options: {
      check_demographics: true,
      strict_validation: false
    }
  })
});

const result = await response.json();
console.log(result);"#;

pub const PYTHON_EXAMPLE: &str = r#"import requests

url = "https://api.cancerqc.com/quality-check"
headers = {
    "Authorization": "Bearer YOUR_API_KEY",
    "Content-Type": "application/json"
}
data = {
    "dataset_url": "https://example.com/dataset.csv",
    "schema_version": "v1.0",
    "options": {
        "check_demographics": True,
        "strict_validation": False
    }
}

response = requests.post(url, headers=headers, json=data)
result = response.json()
print(result)"#;

pub const RESPONSE_EXAMPLE: &str = r#"{
  "id": "qc_abc123def456",
  "status": "completed",
  "dataset_info": {
    "total_records": 8542,
    "columns": 45,
    "file_size": "2.3MB"
  },
  "quality_scores": {
    "schema_compliance": 94,
    "missing_data_percentage": 12,
    "demographic_coverage": 87,
    "overall_score": 89
  },
  "batch_checks": {
    "required_fields": "pass",
    "data_types": "pass",
    "value_ranges": "warning",
    "consistency": "pass"
  },
  "missing_data": [
    {
      "field": "biomarker_status",
      "missing_count": 1245,
      "percentage": 14.6
    }
  ],
  "demographics": {
    "age_groups": 92,
    "gender": 98,
    "ethnicity": 76,
    "geographic": 84
  },
  "recommendations": [
    "Consider improving ethnicity data collection",
    "Review biomarker status collection procedures"
  ]
}"#;

pub const AUTH_HEADER_EXAMPLE: &str = "Authorization: Bearer YOUR_API_KEY";

pub const AUTH_NOTES: [&str; 3] = [
    "API keys are available in your account dashboard",
    "Rate limits: 100 requests per minute for standard accounts",
    "Contact support for enterprise rate limits",
];

/// (title, description, icon, tone) cards at the top of the page.
pub const HIGHLIGHTS: [(&str, &str, &str, &str); 3] = [
    ("Secure", "API key authentication", "🛡", "text-primary"),
    ("Fast", "Real-time analysis", "⚡", "text-success"),
    ("RESTful", "Standard HTTP methods", "▶", "text-warning"),
];
