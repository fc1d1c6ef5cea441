use crate::domain::model::{
    AboutItem, ExperienceEntry, PortfolioContent, Profile, Project, Section, Service, SkillGroup,
    Testimonial,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn skill(heading: &str, list: &[&str]) -> SkillGroup {
    SkillGroup {
        heading: heading.to_string(),
        list: strings(list),
    }
}

fn experience(heading: &str, content: &str, list: &[&str]) -> ExperienceEntry {
    ExperienceEntry {
        heading: heading.to_string(),
        content: content.to_string(),
        list: strings(list),
    }
}

fn project(heading: &str, content: &str, technologies: &[&str]) -> Project {
    Project {
        heading: heading.to_string(),
        content: content.to_string(),
        technologies: strings(technologies),
        link: Some("#".to_string()),
        image: None,
    }
}

fn service(heading: &str, content: &str, icon: &str) -> Service {
    Service {
        heading: heading.to_string(),
        content: content.to_string(),
        icon: icon.to_string(),
    }
}

fn testimonial(name: &str, role: &str, company: &str, content: &str) -> Testimonial {
    Testimonial {
        name: name.to_string(),
        role: role.to_string(),
        company: company.to_string(),
        content: content.to_string(),
        image: None,
    }
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "Jodel Fokou".to_string(),
                title: "Senior Fullstack Developer | Java/Spring Boot & Angular Expert".to_string(),
                slogan: "I build scalable applications that solve real business problems. Let's work together to bring your project to life.".to_string(),
                footer: "© 2026 Jodel Fokou".to_string(),
            },
            about: Section {
                id: "about".to_string(),
                title: "About Me".to_string(),
                items: vec![
                    AboutItem {
                        content: "I'm a senior fullstack developer with a passion for building software that actually works in the real world. Over the years, I've specialized in Java/Spring Boot microservices and Angular applications, helping companies transform their ideas into reliable, high-performance systems.".to_string(),
                    },
                    AboutItem {
                        content: "What I love most is solving complex problems and seeing the impact of my work. Whether it's reducing deployment time from weeks to hours or building platforms that serve thousands of users daily, I focus on delivering results that matter to your business.".to_string(),
                    },
                    AboutItem {
                        content: "I work with teams across Europe and North America (fluent in English and French), and I'm comfortable joining you remotely or on-site. I believe in clean code, continuous learning, and sharing knowledge with the team.".to_string(),
                    },
                ],
            },
            skills: Section {
                id: "skills".to_string(),
                title: "Technical Expertise".to_string(),
                items: vec![
                    skill(
                        "Backend Technologies",
                        &[
                            "Java 17/21, Spring Boot 3.x, Spring Security",
                            "Microservices (Spring Cloud, Resilience patterns)",
                            "REST APIs, GraphQL, OpenAPI/Swagger",
                            "Kafka, RabbitMQ, Redis",
                            "PostgreSQL, MongoDB, JPA/Hibernate",
                        ],
                    ),
                    skill(
                        "Frontend Technologies",
                        &[
                            "Angular 17/18 (Standalone, Signals, SSR)",
                            "TypeScript, RxJS, NgRx State Management",
                            "Tailwind CSS, SCSS, Responsive Design",
                            "Jasmine/Karma, Cypress, Playwright",
                            "WCAG 2.1 AA Accessibility",
                        ],
                    ),
                    skill(
                        "Cloud & DevOps",
                        &[
                            "AWS (EC2, S3, Lambda, ECS, RDS)",
                            "Docker, Kubernetes, Helm",
                            "CI/CD (Jenkins, GitLab CI, GitHub Actions)",
                            "Terraform, Infrastructure as Code",
                            "Prometheus, Grafana, ELK Stack",
                        ],
                    ),
                    skill(
                        "AI & Generative Tools",
                        &[
                            "GitHub Copilot, Claude, ChatGPT",
                            "AI-Assisted Development & Code Review",
                            "Prompt Engineering for Development Tasks",
                            "AI Integration in Applications (OpenAI, Anthropic APIs)",
                            "Automated Documentation & Testing with AI",
                        ],
                    ),
                    skill(
                        "Architecture & Practices",
                        &[
                            "Domain-Driven Design, Clean Architecture",
                            "CQRS, Event Sourcing, Microservices",
                            "TDD/BDD, JUnit, Mockito",
                            "OWASP Security, OAuth2, JWT",
                            "Agile/Scrum, Technical Documentation",
                        ],
                    ),
                    skill(
                        "Development Tools & Collaboration",
                        &[
                            "Git, GitHub, GitLab, Bitbucket",
                            "IntelliJ IDEA, VS Code, JetBrains Suite",
                            "Jira, Confluence, Slack",
                            "Postman, Insomnia, Swagger UI",
                            "SonarQube, Code Quality & Security Analysis",
                        ],
                    ),
                ],
            },
            experience: Section {
                id: "experience".to_string(),
                title: "Professional Experience".to_string(),
                items: vec![
                    experience(
                        "Senior Fullstack Developer - Enterprise Solutions (2022 - Present)",
                        "Currently leading the migration from a monolithic system to Spring Boot microservices for a financial services company. It's been challenging but rewarding - we've cut deployment time by 70% and achieved 99.9% uptime.",
                        &[
                            "Improved performance by 40% through smart caching and architecture optimization",
                            "Built Angular apps that now serve 100K+ users every day",
                            "Set up CI/CD pipelines that took us from deploying weekly to deploying multiple times a day",
                            "Mentor a team of 5 developers - helping them grow while we ship great features",
                        ],
                    ),
                    experience(
                        "Fullstack Java/Angular Developer - International Consulting (2019 - 2022)",
                        "Worked with clients across banking, healthcare, and e-commerce in Europe and North America. Every project taught me something new about building systems that need to work at scale.",
                        &[
                            "Designed a microservices platform that handles over 10M API calls per day",
                            "Led our AWS migration - not just moving servers, but rethinking how we deploy and scale",
                            "Implemented OAuth2/JWT security to meet GDPR requirements",
                            "Proud of our 95%+ client satisfaction score - building trust is as important as writing code",
                        ],
                    ),
                    experience(
                        "Java Backend Developer - Tech Startup (2017 - 2019)",
                        "Joined a small team building a SaaS product from scratch. Wore many hats and learned what it takes to scale from MVP to thousands of paying customers.",
                        &[
                            "Built REST APIs with Spring Boot that now handle 2M+ requests daily",
                            "Spent countless hours optimizing database queries - cut response time by 60%",
                            "Introduced automated testing and got us to 85%+ code coverage",
                            "Loved the fast pace of daily standups, quick iterations, and seeing users actually use what we built",
                        ],
                    ),
                ],
            },
            projects: Section {
                id: "projects".to_string(),
                title: "Featured Projects".to_string(),
                items: vec![
                    project(
                        "Banking Microservices Platform",
                        "Built a secure transaction processing platform for a financial services company. It handles 10M+ transactions daily with 99.95% uptime. The challenge was making it both fast and reliable - we reduced processing time by 55%.",
                        &["Java 21", "Spring Boot 3", "Kafka", "PostgreSQL", "Docker", "AWS ECS"],
                    ),
                    project(
                        "E-Commerce Angular Application",
                        "Created a complete e-commerce platform with real-time inventory updates, payment processing, and analytics. It serves 50K+ users daily and loads in under 2 seconds. Performance was key here.",
                        &["Angular 18", "NgRx", "Tailwind CSS", "Spring Boot", "Redis", "Stripe API"],
                    ),
                    project(
                        "Real-time Analytics Dashboard",
                        "Developed an event-driven analytics platform with live data streaming and interactive visualizations. Processing 1M+ events per hour with sub-second latency was quite the technical challenge.",
                        &["Angular", "RxJS", "D3.js", "Spring Cloud", "Kafka", "Kubernetes"],
                    ),
                    project(
                        "Cloud-Native SaaS Platform",
                        "Led the migration from a legacy monolith to cloud-native microservices. Set up CI/CD and infrastructure as code. Deployment time went from 4 hours to 15 minutes - the team was thrilled.",
                        &["Java 17", "Spring Cloud", "Angular", "Terraform", "AWS", "Jenkins"],
                    ),
                    project(
                        "Healthcare Management System",
                        "Built a HIPAA-compliant patient management system with strict role-based access control. Had to integrate with several legacy systems while meeting modern security standards.",
                        &["Spring Boot", "Angular", "MongoDB", "OAuth2", "Docker"],
                    ),
                    project(
                        "API Gateway & Service Mesh",
                        "Designed an API gateway that handles 5M+ requests daily with rate limiting, auth, and full monitoring. Improved system observability by 80% - now the team can actually see what's happening.",
                        &["Spring Cloud Gateway", "Redis", "Prometheus", "Grafana", "ELK Stack"],
                    ),
                ],
            },
            services: Section {
                id: "services".to_string(),
                title: "Services & Solutions".to_string(),
                items: vec![
                    service(
                        "Enterprise Application Development",
                        "I design and build scalable applications using Java/Spring Boot and Angular. My focus is on creating systems that are fast, secure, and easy to maintain. Most clients see 40-60% faster time-to-market and 99.9%+ uptime after we're done.",
                        "💻",
                    ),
                    service(
                        "Cloud Migration & DevOps",
                        "Moving to the cloud doesn't have to be painful. I help you migrate legacy systems to AWS, set up CI/CD pipelines, and automate your infrastructure. On average, clients cut costs by 35% and deploy 70% faster.",
                        "☁️",
                    ),
                    service(
                        "Architecture & Technical Consulting",
                        "Need a fresh pair of eyes on your codebase? I do architecture reviews, code audits, and help teams make smart decisions about their tech stack. I bring patterns like DDD and Clean Architecture when they make sense for your project.",
                        "🏗️",
                    ),
                    service(
                        "Performance Optimization",
                        "Is your app slow? I find and fix performance bottlenecks in both backend and frontend. Database tuning, caching strategies, load testing - whatever it takes. I typically deliver 40-80% performance improvements.",
                        "⚡",
                    ),
                    service(
                        "Team Augmentation & Mentoring",
                        "I can join your team as a senior developer or tech lead. Beyond shipping features, I enjoy mentoring junior and mid-level developers, sharing best practices, and helping the whole team level up their skills.",
                        "👥",
                    ),
                    service(
                        "Legacy System Modernization",
                        "Stuck with an old monolith or outdated Angular version? I help modernize legacy systems step by step - migrating to microservices, upgrading to the latest Angular features, all while keeping your system running smoothly.",
                        "🔄",
                    ),
                ],
            },
            testimonials: Section {
                id: "testimonials".to_string(),
                title: "Client Testimonials".to_string(),
                items: vec![
                    testimonial(
                        "Sarah Johnson",
                        "VP Engineering",
                        "FinTech Solutions Inc.",
                        "Jodel led our migration to microservices and honestly, I was skeptical at first. But he delivered beyond expectations - 99.95% uptime and we cut costs by 40%. What impressed me most was how he explained complex technical decisions in terms our business team could understand.",
                    ),
                    testimonial(
                        "Marc Dubois",
                        "CTO",
                        "E-Commerce Ventures",
                        "We needed our Angular app done fast, and Jodel delivered ahead of schedule. The platform handles 50K users daily without breaking a sweat. Plus, he mentored our junior devs along the way - they learned more in 3 months than in the previous year.",
                    ),
                    testimonial(
                        "Lisa Chen",
                        "Product Director",
                        "HealthTech Systems",
                        "Working with Jodel on our HIPAA-compliant platform was a relief. He didn't just write code - he helped us navigate security requirements and compliance challenges. Very professional, always available, and genuinely cares about the project's success.",
                    ),
                    testimonial(
                        "Thomas Müller",
                        "Engineering Manager",
                        "Enterprise Solutions GmbH",
                        "Jodel joined us as a senior dev and immediately raised the bar. He introduced clean architecture and TDD practices without being preachy about it. Now our team ships features faster with way fewer bugs. Game-changer for us.",
                    ),
                    testimonial(
                        "Jennifer Williams",
                        "Tech Lead",
                        "Digital Innovation Corp",
                        "What I appreciate about Jodel is his versatility - equally strong on Java backend and Angular frontend. He doesn't just solve problems; he thinks ahead and builds solutions that scale. Solid technical skills paired with great communication.",
                    ),
                    testimonial(
                        "Pierre Laurent",
                        "Founder & CEO",
                        "StartupLab",
                        "As a startup, we needed someone who could move fast but also build things right. Jodel helped us scale from MVP to 5000+ customers, and his architectural decisions still hold up as we keep growing. Would hire him again in a heartbeat.",
                    ),
                ],
            },
        }
    }
}
