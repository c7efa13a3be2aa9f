//! Prompt templates for the semantic extraction endpoint

/// Prompt templates for whole-document and per-chunk extraction
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub system: String,
    pub chunk_system: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            system: SYSTEM_TEMPLATE.to_string(),
            chunk_system: CHUNK_SYSTEM_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplates {
    pub fn render_user(&self, text: &str) -> String {
        USER_TEMPLATE.replace("{text}", text)
    }

    /// The chunk preamble plus the full schema-bearing system prompt.
    pub fn render_chunk_system(&self, index: usize, total: usize) -> String {
        let preamble = self
            .chunk_system
            .replace("{index}", &(index + 1).to_string())
            .replace("{total}", &total.to_string());
        format!("{}\n\n{}", preamble, self.system)
    }
}

const SYSTEM_TEMPLATE: &str = r#"You are an expert at extracting structured information from professional profile PDFs.
Analyze the provided text and extract relevant information into the JSON schema below.

Guidelines:
1. Extract personal information (name, title, contact details) from the header section
2. Identify work experience with dates, positions, companies, and descriptions
3. Find education information including degrees, schools, and dates
4. Extract skills, certifications with their issuers, and language skills
5. Extract the professional summary/about section

Important:
- For current positions, set current=true and use "Present" as end_date
- Extract job descriptions as a list of strings
- Use "Intermediate" as the skill level when not explicitly stated
- Handle both English and German content
- Use empty strings or empty arrays when information is not available
- Respond with a single JSON object and nothing else

Schema:
{
  "personal_info": {"name": "", "title": "", "email": "", "phone": "", "location": "", "profile_url": "", "website": ""},
  "summary": "",
  "experience": [{"position": "", "company": "", "location": "", "start_date": "", "end_date": "", "current": false, "description": [""]}],
  "education": [{"degree": "", "school": "", "location": "", "start_date": "", "end_date": "", "gpa": "", "description": ""}],
  "skills": [{"name": "", "level": "Intermediate"}],
  "certifications": [{"name": "", "issuer": "", "date": "", "url": ""}],
  "languages": [{"name": "", "level": ""}]
}"#;

const CHUNK_SYSTEM_TEMPLATE: &str = r#"You are extracting data from part {index} of {total} of a professional profile document.
Extract any relevant resume information from this chunk following the schema below.
If this chunk does not contain certain types of information, return empty values for those fields."#;

const USER_TEMPLATE: &str = r#"Extract structured resume data from this profile text:

{text}

Return the data as a JSON object following the schema."#;
