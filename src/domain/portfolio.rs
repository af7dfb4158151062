/// Metadata parameterizing a single portfolio render. Transient: it has no
/// lifecycle beyond the render call and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioDocument {
    pub title: String,
    pub project_type: String,
    pub date: String,
    pub client: String,
    pub website: String,
    pub overview: String,
    pub features: Vec<String>,
    pub tech_stack: Vec<String>,
}

impl Default for PortfolioDocument {
    fn default() -> Self {
        Self {
            title: "Innovative Financial Dashboard App".to_string(),
            project_type: "UX/UI Design".to_string(),
            date: "September 2024".to_string(),
            client: "DigitalCraft Solutions".to_string(),
            website: "projectwebsite.example.com".to_string(),
            overview: "A comprehensive financial dashboard designed to provide real-time \
                       insights and analytics for modern businesses."
                .to_string(),
            features: [
                "Real-time Data Visualization",
                "User Role Management",
                "Secure Authentication",
                "Customizable Dashboards",
                "Data Export Options",
                "Multi-device Support",
            ]
            .map(String::from)
            .to_vec(),
            tech_stack: ["Python", "Flask", "PostgreSQL", "React", "AWS"]
                .map(String::from)
                .to_vec(),
        }
    }
}
