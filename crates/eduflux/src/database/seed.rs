//! First-run dataset for the document store

use iso8601_timestamp::Timestamp;

use crate::models::{
    Course, CourseModule, Difficulty, Download, ExternalAccount, ModuleStatus, Payment, Platform,
    PlatformStats, PriceType, Problem, ProblemSet, Resource, ResourceKind, Role, User,
};
use crate::util::{hash_password, normalise_email};
use crate::Result;

use super::document::Document;

fn ts(value: &str) -> Timestamp {
    Timestamp::parse(value).expect("valid seed timestamp")
}

fn seed_user(
    id: &str,
    name: &str,
    email: &str,
    password: &str,
    role: Role,
    enrolled_courses: Vec<&str>,
    external_accounts: Vec<ExternalAccount>,
) -> Result<User> {
    Ok(User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        email_normalised: normalise_email(email),
        password: hash_password(password.to_string())?,
        role,
        verified: true,
        enrolled_courses: enrolled_courses.into_iter().map(String::from).collect(),
        external_accounts,
    })
}

fn course(
    id: &str,
    title: &str,
    description: &str,
    instructor: &str,
    price: f64,
    tags: Vec<&str>,
    image_seed: &str,
    price_type: PriceType,
    modules: Vec<(&str, ModuleStatus)>,
    downloads: Vec<(&str, &str)>,
) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        instructor: instructor.to_string(),
        price,
        tags: tags.into_iter().map(String::from).collect(),
        image_url: format!("https://picsum.photos/seed/{}/600/400", image_seed),
        price_type,
        modules: modules
            .into_iter()
            .map(|(title, status)| CourseModule {
                title: title.to_string(),
                status,
            })
            .collect(),
        downloads: downloads
            .into_iter()
            .map(|(title, kind)| Download {
                title: title.to_string(),
                kind: kind.to_string(),
                url: "#".to_string(),
            })
            .collect(),
    }
}

fn resource(
    id: &str,
    kind: ResourceKind,
    title: &str,
    description: &str,
    category: &str,
) -> Resource {
    Resource {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        description: description.to_string(),
        url: "#".to_string(),
        category: category.to_string(),
    }
}

fn problem(id: &str, title: &str, difficulty: Difficulty, platform: Platform) -> Problem {
    Problem {
        id: id.to_string(),
        title: title.to_string(),
        difficulty,
        url: "#".to_string(),
        platform,
    }
}

/// Build the document a brand-new store starts from
pub fn initial_document() -> Result<Document> {
    let admin = seed_user(
        "admin01",
        "Admin User",
        "admin@eduflux.ai",
        "admin",
        Role::Admin,
        vec![],
        vec![],
    )?;

    let student = seed_user(
        "student01",
        "Alex Johnson",
        "alex@eduflux.ai",
        "alex",
        Role::Student,
        vec!["c1", "c3"],
        vec![
            ExternalAccount {
                platform: Platform::LeetCode,
                username: "alex_j".to_string(),
                profile_url: "#".to_string(),
                api_key: None,
                stats: PlatformStats {
                    solved_count: 150,
                    ranking: 10250,
                },
                last_synced: ts("2024-07-28T10:00:00Z"),
            },
            ExternalAccount {
                platform: Platform::HackerRank,
                username: "alex_j_hr".to_string(),
                profile_url: "#".to_string(),
                api_key: Some("dummy_api_key_12345".to_string()),
                stats: PlatformStats {
                    solved_count: 85,
                    ranking: 5120,
                },
                last_synced: ts("2024-07-27T18:30:00Z"),
            },
        ],
    )?;

    Ok(Document {
        users: vec![admin, student],
        courses: vec![
            course(
                "c1",
                "Java Full-Stack Mastery",
                "Become a complete Java developer. From Spring Boot to React, this course covers it all.",
                "Dr. Evelyn Reed",
                49.99,
                vec!["Java", "Spring Boot", "Full-Stack"],
                "java",
                PriceType::Paid,
                vec![
                    ("1. Introduction (Completed)", ModuleStatus::Completed),
                    ("2. Setting up Java", ModuleStatus::Completed),
                    ("3. Spring Boot Basics", ModuleStatus::InProgress),
                    ("4. RESTful APIs", ModuleStatus::NotStarted),
                    ("5. Connecting to a Database", ModuleStatus::NotStarted),
                ],
                vec![
                    ("Lecture_Slides.pdf", "pdf"),
                    ("Lecture_Snippets.zip", "zip"),
                    ("Code_Snippets.zip", "zip"),
                ],
            ),
            course(
                "c2",
                "AI & Machine Learning Deep Dive",
                "Explore the world of AI with Python, TensorFlow, and PyTorch. Build real-world models.",
                "Prof. Kenji Tanaka",
                79.99,
                vec!["AI", "Machine Learning", "Python"],
                "ai",
                PriceType::Paid,
                vec![],
                vec![],
            ),
            course(
                "c3",
                "Modern Frontend with React & Tailwind",
                "Create beautiful, responsive user interfaces with React, TypeScript, and Tailwind CSS.",
                "Maria Garcia",
                39.99,
                vec!["React", "Frontend", "Tailwind CSS"],
                "react",
                PriceType::Paid,
                vec![
                    ("1. Introduction to React", ModuleStatus::Completed),
                    ("2. State and Props", ModuleStatus::Completed),
                    ("3. Hooks Deep Dive", ModuleStatus::Completed),
                    ("4. Styling with Tailwind CSS", ModuleStatus::InProgress),
                ],
                vec![("React_Cheatsheet.pdf", "pdf"), ("Project_Files.zip", "zip")],
            ),
            course(
                "c4",
                "Cloud Native with Docker & Kubernetes",
                "Learn to deploy and manage scalable applications using containerization and orchestration.",
                "David Chen",
                59.99,
                vec!["Cloud", "DevOps", "Kubernetes"],
                "cloud",
                PriceType::Paid,
                vec![],
                vec![],
            ),
            course(
                "c5",
                "Data Science & Big Data Analytics",
                "Master data analysis, visualization, and big data technologies like Spark and Hadoop.",
                "Dr. Aisha Khan",
                69.99,
                vec!["Data Science", "Big Data", "Analytics"],
                "datascience",
                PriceType::Paid,
                vec![],
                vec![],
            ),
            course(
                "c6",
                "Introduction to Data Structures",
                "A beginner-friendly introduction to fundamental data structures like arrays, linked lists, and trees.",
                "Community Contribution",
                0.0,
                vec!["DSA", "Beginner", "Free"],
                "dsa",
                PriceType::Free,
                vec![],
                vec![],
            ),
        ],
        resources: vec![
            resource(
                "r1",
                ResourceKind::Youtube,
                "Spring Boot Tutorial for Beginners",
                "A complete 4-hour course on Spring Boot.",
                "Java",
            ),
            resource(
                "r2",
                ResourceKind::Book,
                "Clean Code by Robert C. Martin",
                "A handbook of agile software craftsmanship.",
                "Software Design",
            ),
            resource(
                "r3",
                ResourceKind::Article,
                "Understanding React Hooks",
                "A deep dive into useState and useEffect.",
                "React",
            ),
            resource(
                "r4",
                ResourceKind::Pdf,
                "The Kubernetes Handbook",
                "An overview of K8s concepts.",
                "Cloud",
            ),
            resource(
                "r5",
                ResourceKind::Link,
                "GeeksforGeeks DSA Problems",
                "Practice data structures and algorithms.",
                "DSA",
            ),
            resource(
                "r6",
                ResourceKind::Youtube,
                "MIT 6.006: Intro to Algorithms",
                "Classic lectures from MIT on algorithms.",
                "DSA",
            ),
        ],
        problem_sets: vec![
            ProblemSet {
                category: "Arrays".to_string(),
                problems: vec![
                    problem("dsa1", "Two Sum", Difficulty::Easy, Platform::LeetCode),
                    problem(
                        "dsa2",
                        "Container With Most Water",
                        Difficulty::Medium,
                        Platform::LeetCode,
                    ),
                ],
            },
            ProblemSet {
                category: "Linked Lists".to_string(),
                problems: vec![
                    problem(
                        "dsa3",
                        "Reverse a Linked List",
                        Difficulty::Easy,
                        Platform::HackerRank,
                    ),
                    problem(
                        "dsa4",
                        "Merge K Sorted Lists",
                        Difficulty::Hard,
                        Platform::LeetCode,
                    ),
                ],
            },
            ProblemSet {
                category: "Trees".to_string(),
                problems: vec![
                    problem(
                        "dsa5",
                        "Maximum Depth of Binary Tree",
                        Difficulty::Easy,
                        Platform::GeeksforGeeks,
                    ),
                    problem(
                        "dsa6",
                        "Validate Binary Search Tree",
                        Difficulty::Medium,
                        Platform::LeetCode,
                    ),
                ],
            },
            ProblemSet {
                category: "Dynamic Programming".to_string(),
                problems: vec![
                    problem("dsa7", "Climbing Stairs", Difficulty::Easy, Platform::LeetCode),
                    problem(
                        "dsa8",
                        "Longest Palindromic Substring",
                        Difficulty::Medium,
                        Platform::CodeChef,
                    ),
                ],
            },
        ],
        otp_store: Default::default(),
        login_otp_store: Default::default(),
        transactions: vec![
            Payment {
                transaction_id: "tx1".to_string(),
                user_id: "student01".to_string(),
                course_id: "c1".to_string(),
                amount: 49.99,
                timestamp: ts("2024-07-20T10:00:00Z"),
            },
            Payment {
                transaction_id: "tx2".to_string(),
                user_id: "student01".to_string(),
                course_id: "c3".to_string(),
                amount: 39.99,
                timestamp: ts("2024-07-25T15:30:00Z"),
            },
        ],
    })
}
