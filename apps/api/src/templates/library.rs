/// A built-in template before it is assigned an id and stored.
pub struct PredefinedTemplate {
    pub category: &'static str,
    pub title: &'static str,
    pub template: &'static str,
    pub description: &'static str,
}

pub static PREDEFINED_TEMPLATES: &[PredefinedTemplate] = &[
    PredefinedTemplate {
        category: "text_summarization",
        title: "Article Summarizer",
        template: "Please provide a comprehensive summary of the following text. Focus on the main points, key arguments, and important conclusions. Structure your summary with clear headings and bullet points where appropriate. Keep the summary to approximately [X] words while maintaining all critical information.

Text to summarize:
[INSERT TEXT HERE]",
        description: "Template for summarizing articles, documents, or long-form content",
    },
    PredefinedTemplate {
        category: "code_generation",
        title: "Function Generator",
        template: "Create a [PROGRAMMING LANGUAGE] function that [SPECIFIC FUNCTIONALITY]. The function should:

- Accept the following parameters: [LIST PARAMETERS]
- Return: [EXPECTED RETURN TYPE]
- Include proper error handling for [POTENTIAL ERRORS]
- Follow [CODING STANDARDS] conventions
- Include clear comments and docstrings

Additional requirements:
[LIST ANY SPECIFIC REQUIREMENTS]",
        description: "Template for generating code functions with specific requirements",
    },
    PredefinedTemplate {
        category: "content_creation",
        title: "Blog Post Creator",
        template: "Write a comprehensive blog post about [TOPIC] for [TARGET AUDIENCE]. The post should:

- Have an engaging headline
- Include an introduction that hooks the reader
- Cover these key points: [LIST KEY POINTS]
- Be approximately [WORD COUNT] words
- Include practical examples or case studies
- End with a clear call-to-action
- Use an [TONE] tone throughout

SEO keywords to incorporate: [LIST KEYWORDS]",
        description: "Template for creating engaging blog posts and articles",
    },
    PredefinedTemplate {
        category: "data_analysis",
        title: "Data Insights Generator",
        template: "Analyze the following dataset and provide insights. Please:

1. Summarize the key statistics and trends
2. Identify any patterns or anomalies
3. Provide actionable recommendations based on the data
4. Highlight the most significant findings
5. Suggest areas for further investigation

Data context: [DESCRIBE THE DATA]
Specific questions to address: [LIST QUESTIONS]

Dataset:
[INSERT DATA HERE]",
        description: "Template for analyzing data and generating insights",
    },
    PredefinedTemplate {
        category: "chatbot_response",
        title: "Customer Service Bot",
        template: "You are a helpful customer service representative for [COMPANY NAME]. Respond to the following customer inquiry with:

- A warm, professional tone
- Clear and helpful information
- Specific steps or solutions when applicable
- Appropriate empathy for any concerns
- Offer to escalate if needed

Company policies to keep in mind: [LIST RELEVANT POLICIES]

Customer inquiry:
[INSERT CUSTOMER MESSAGE HERE]",
        description: "Template for creating customer service chatbot responses",
    },
    PredefinedTemplate {
        category: "creative_writing",
        title: "Story Generator",
        template: "Write a [GENRE] story that includes:

- Setting: [TIME PERIOD/LOCATION]
- Main character: [CHARACTER DESCRIPTION]
- Central conflict: [DESCRIBE CONFLICT]
- Tone: [TONE/MOOD]
- Word count: Approximately [NUMBER] words
- Must include these elements: [LIST SPECIFIC ELEMENTS]

The story should have a clear beginning, middle, and end with engaging dialogue and vivid descriptions.",
        description: "Template for generating creative stories and narratives",
    },
    PredefinedTemplate {
        category: "email_templates",
        title: "Professional Email",
        template: "Compose a professional email with the following details:

- Purpose: [EMAIL PURPOSE]
- Recipient: [WHO YOU'RE WRITING TO]
- Tone: [FORMAL/CASUAL/FRIENDLY]
- Key points to cover: [LIST MAIN POINTS]
- Desired action from recipient: [WHAT YOU WANT THEM TO DO]
- Context/background: [RELEVANT BACKGROUND INFO]

Include an appropriate subject line and professional closing.",
        description: "Template for creating professional email communications",
    },
    PredefinedTemplate {
        category: "social_media",
        title: "Social Media Post",
        template: "Create a [PLATFORM] post about [TOPIC] that:

- Engages [TARGET AUDIENCE]
- Uses an [TONE] tone
- Includes relevant hashtags (suggest 5-10)
- Has a clear call-to-action
- Fits platform character limits
- Encourages engagement (likes, shares, comments)

Key message: [MAIN MESSAGE]
Hashtag strategy: [SPECIFIC HASHTAG REQUIREMENTS]",
        description: "Template for creating engaging social media content",
    },
    PredefinedTemplate {
        category: "academic_writing",
        title: "Research Paper Section",
        template: "Write a [SECTION TYPE] for an academic paper on [RESEARCH TOPIC]. This section should:

- Follow [CITATION STYLE] format
- Be approximately [WORD COUNT] words
- Include relevant citations and references
- Maintain an objective, scholarly tone
- Address these key points: [LIST KEY POINTS]
- Connect to the broader research question: [RESEARCH QUESTION]

Target journal/audience: [PUBLICATION TARGET]",
        description: "Template for academic writing and research papers",
    },
    PredefinedTemplate {
        category: "marketing_copy",
        title: "Product Launch Copy",
        template: "Create compelling marketing copy for [PRODUCT/SERVICE] that:

- Highlights key benefits: [LIST BENEFITS]
- Addresses target customer pain points: [LIST PAIN POINTS]
- Includes social proof or testimonials
- Has a strong call-to-action
- Uses persuasive language appropriate for [TARGET AUDIENCE]
- Emphasizes unique selling proposition: [USP]
- Fits [FORMAT] format requirements

Brand voice: [BRAND PERSONALITY]",
        description: "Template for creating effective marketing and sales copy",
    },
];
