//! The literal site content.
//!
//! Everything the site shows is authored here and compiled in. Content
//! changes mean editing this module and redeploying; nothing is fetched or
//! mutated at runtime.

use std::sync::LazyLock;

use crate::core::repository::ProjectRepository;
use crate::types::{
    AspectRatio, Category, Certificate, DeveloperInfo, Education, Experience, Extracurricular,
    Project, ProjectImage, Skills, SocialLinks,
};

/// Process-wide project repository, built once on first access.
pub static REPOSITORY: LazyLock<ProjectRepository> =
    LazyLock::new(|| ProjectRepository::new(projects()));

/// Process-wide developer record, built once on first access.
pub static DEVELOPER: LazyLock<DeveloperInfo> = LazyLock::new(developer_info);

fn image(id: &str, src: &str, alt: &str, aspect_ratio: AspectRatio) -> ProjectImage {
    ProjectImage {
        id: id.to_string(),
        src: src.to_string(),
        alt: alt.to_string(),
        aspect_ratio,
        caption: None,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// The ordered project collection. Order matters: the first four entries are
/// the featured projects and adjacency follows this order.
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "Airbnb Clone".to_string(),
            category: Category::Fullstack,
            year: "2024".to_string(),
            slug: "airbnb-clone".to_string(),
            cover_image: "https://images.unsplash.com/photo-1551882547-ff40c63fe5fa?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080".to_string(),
            description: "A full-stack web application that seamlessly integrates responsive front-end interfaces, server-side logic, and database connectivity, supporting active users with 30+ property listings.".to_string(),
            tech_stack: strings(&["Node.js", "Express.js", "MongoDB", "REST API", "Git"]),
            live_url: Some("#".to_string()),
            github_url: Some("#".to_string()),
            location: Some("Personal Project".to_string()),
            images: vec![
                image(
                    "1-1",
                    "https://images.unsplash.com/photo-1551882547-ff40c63fe5fa?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
                    "Airbnb Clone Homepage",
                    AspectRatio::Landscape,
                ),
                image(
                    "1-2",
                    "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
                    "Property Listing Page",
                    AspectRatio::Landscape,
                ),
                image(
                    "1-3",
                    "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
                    "Booking Interface",
                    AspectRatio::Landscape,
                ),
            ],
        },
        Project {
            id: "2".to_string(),
            title: "AssetFlow Inventory Management".to_string(),
            category: Category::Fullstack,
            year: "2024".to_string(),
            slug: "assetflow-inventory".to_string(),
            cover_image: "https://images.unsplash.com/photo-1586528116311-ad8dd3c8310d?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080".to_string(),
            description: "A centralized inventory tracking system for 500+ club members, automating approval workflows via SMTP emails to reduce asset loss by 40%. Features rigorous feature engineering and hyperparameter tuning processes.".to_string(),
            tech_stack: strings(&["Node.js", "Express.js", "Vanilla JS", "SQLite", "SMTP"]),
            live_url: Some("#".to_string()),
            github_url: Some("#".to_string()),
            location: Some("VIT Vellore".to_string()),
            images: vec![
                image(
                    "2-1",
                    "https://images.unsplash.com/photo-1586528116311-ad8dd3c8310d?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
                    "Inventory Dashboard",
                    AspectRatio::Landscape,
                ),
                image(
                    "2-2",
                    "https://images.unsplash.com/photo-1460925895917-afdab827c52f?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
                    "Asset Management Interface",
                    AspectRatio::Landscape,
                ),
                image(
                    "2-3",
                    "https://images.unsplash.com/photo-1551288049-bebda4e38f71?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
                    "Analytics Dashboard",
                    AspectRatio::Landscape,
                ),
            ],
        },
        Project {
            id: "3".to_string(),
            title: "RESTful API Gateway".to_string(),
            category: Category::Backend,
            year: "2024".to_string(),
            slug: "api-gateway".to_string(),
            cover_image: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080".to_string(),
            description: "A scalable API gateway with rate limiting, JWT authentication, and request logging. Handles 10,000+ requests per minute with Redis caching and load balancing across multiple microservices.".to_string(),
            tech_stack: strings(&["Node.js", "Express.js", "Redis", "JWT", "PostgreSQL", "Docker"]),
            live_url: Some("#".to_string()),
            github_url: Some("#".to_string()),
            location: Some("Personal Project".to_string()),
            images: vec![
                image(
                    "3-1",
                    "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
                    "API Gateway Architecture",
                    AspectRatio::Landscape,
                ),
                image(
                    "3-2",
                    "https://images.unsplash.com/photo-1544197150-b99a580bb7a8?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
                    "API Documentation",
                    AspectRatio::Landscape,
                ),
                image(
                    "3-3",
                    "https://images.unsplash.com/photo-1518770660439-4636190af475?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
                    "Performance Metrics",
                    AspectRatio::Landscape,
                ),
            ],
        },
    ]
}

pub fn developer_info() -> DeveloperInfo {
    DeveloperInfo {
        name: "Sahil Kawadse".to_string(),
        tagline: "Aspiring Software Engineer".to_string(),
        hero_introduction: "Building robust web applications with modern technologies and clean, maintainable code.".to_string(),
        biography: "I'm an Electronics and Communication Engineering student at VIT Vellore, passionate about building scalable web applications and solving complex problems. With hands-on experience in full-stack development, I specialize in creating efficient backend systems and intuitive user interfaces.\n\nMy journey in software development has led me to work on diverse projects\u{2014}from building full-stack applications like an Airbnb clone to developing inventory management systems that serve hundreds of users. I believe in writing clean, maintainable code and continuously learning new technologies to stay at the cutting edge of web development.".to_string(),
        approach: "I approach every project with a focus on scalability, performance, and user experience. Whether it's architecting RESTful APIs, designing database schemas, or crafting responsive frontends, I ensure that every component is built to last and easy to maintain.\n\nMy experience in collaborative environments has taught me the importance of clear communication, code reviews, and agile development practices. I'm always eager to take on new challenges and contribute to impactful projects.".to_string(),
        skills: Skills {
            languages: strings(&["C++", "JavaScript", "SQL", "HTML", "CSS"]),
            frameworks: strings(&["Node.js", "Express.js", "GraphQL"]),
            databases: strings(&["MySQL", "PostgreSQL", "MongoDB", "SQLite"]),
            tools: strings(&["Git", "GitHub"]),
            soft_skills: strings(&[
                "Rapport Building",
                "Stakeholder Management",
                "People Management",
                "Communication",
            ]),
        },
        experience: vec![Experience {
            title: "Web Development Intern".to_string(),
            company: "Moodale".to_string(),
            period: "May 2025 - Jul 2025".to_string(),
            description: strings(&[
                "Assisted in designing and developing the backend using core JavaScript concepts",
                "Collaborated with a team of 4 developers to build and maintain backend APIs using JavaScript and Express.js",
                "Implemented 5+ RESTful routes enhancing backend performance and maintainability",
                "Managed pull requests, code reviews, and seamless collaboration using Git and GitHub",
            ]),
        }],
        education: Education {
            degree: "Bachelor of Technology in Electronics and Communication".to_string(),
            institution: "Vellore Institute of Technology".to_string(),
            location: "Vellore, India".to_string(),
            cgpa: "9.14".to_string(),
            period: "2022 - 2026".to_string(),
        },
        certificates: vec![
            Certificate {
                name: "SQL Bootcamp".to_string(),
                issuer: "Online Certification".to_string(),
                link: None,
            },
            Certificate {
                name: "C++ Data Structures and Algorithms".to_string(),
                issuer: "Udemy".to_string(),
                link: None,
            },
        ],
        extracurricular: vec![
            Extracurricular {
                role: "Outreach Head".to_string(),
                organization: "The Electronics Club, VIT Vellore".to_string(),
                description: "Spearheaded outreach initiatives, organizing technical workshops and hackathons that fostered collaboration and skill development.".to_string(),
            },
            Extracurricular {
                role: "Research Author".to_string(),
                organization: "Springer Nature".to_string(),
                description: "Co-authored and published research on optimizing RIS-assisted 6G networks, achieving significant improvements in Bit Error Rate (BER) and network capacity.".to_string(),
            },
        ],
        location: "Nagpur, Maharashtra, India".to_string(),
        email: "kawadsesahil07@gmail.com".to_string(),
        phone: "+91 8530290669".to_string(),
        availability: "Open to opportunities for 2026".to_string(),
        social_links: SocialLinks {
            linkedin: Some("https://www.linkedin.com/in/sahil-kawadse-34829624a/".to_string()),
            github: Some("https://github.com/sahil8303".to_string()),
        },
        portrait_image: "/assets/sahil-profile.jpg".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_passes_validation() {
        REPOSITORY.validate().expect("authored dataset is valid");
    }

    #[test]
    fn dataset_fields_are_populated() {
        for project in REPOSITORY.all() {
            assert!(!project.id.is_empty());
            assert!(!project.title.is_empty());
            assert!(!project.slug.is_empty());
            assert!(!project.cover_image.is_empty());
            assert!(!project.tech_stack.is_empty());
            assert!(!project.images.is_empty());
        }
    }

    #[test]
    fn slugs_are_url_safe() {
        for project in REPOSITORY.all() {
            assert!(
                project
                    .slug
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "slug \"{}\" is not URL-safe",
                project.slug
            );
        }
    }

    #[test]
    fn developer_record_has_paragraph_structure() {
        assert_eq!(DEVELOPER.name, "Sahil Kawadse");
        assert_eq!(DEVELOPER.biography_paragraphs().len(), 2);
        assert_eq!(DEVELOPER.approach_paragraphs().len(), 2);
        assert!(!DEVELOPER.skills.languages.is_empty());
        assert!(!DEVELOPER.experience.is_empty());
        assert!(DEVELOPER.social_links.github.is_some());
    }
}
