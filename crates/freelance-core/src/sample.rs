//! Built-in sample data
//!
//! The dashboard has no backend; these records live for the life of the page.

use chrono::NaiveDate;

use crate::client::{Client, ClientStatus};
use crate::earnings::{ChartPoint, EarningsBucket, EarningsTable, Transaction, TransactionStatus, TransactionType};
use crate::priority::Priority;
use crate::project::{Project, ProjectStatus, TeamMember};

/// Client feedback shown on the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub message: &'static str,
    pub client_name: &'static str,
    /// Out of five
    pub rating: f64,
}

// Literal sample dates, always valid
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn client(
    id: u32,
    name: &str,
    email: &str,
    phone: &str,
    (projects, active_projects): (u32, u32),
    total_spent: f64,
    last_contact: NaiveDate,
    status: ClientStatus,
    avatar: &str,
    notes: &str,
    priority: Priority,
) -> Client {
    Client {
        id,
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        projects,
        active_projects,
        total_spent,
        last_contact,
        status,
        avatar: avatar.to_string(),
        notes: notes.to_string(),
        priority,
    }
}

pub fn clients() -> Vec<Client> {
    vec![
        client(
            1,
            "Sarah Johnson",
            "sarah@techcorp.com",
            "+1 (555) 123-4567",
            (8, 3),
            42500.0,
            date(2023, 5, 15),
            ClientStatus::Active,
            "https://randomuser.me/api/portraits/women/44.jpg",
            "Prefers weekly updates",
            Priority::High,
        ),
        client(
            2,
            "Michael Chen",
            "michael@designstudio.io",
            "+1 (555) 987-6543",
            (12, 2),
            68200.0,
            date(2023, 6, 2),
            ClientStatus::Active,
            "https://randomuser.me/api/portraits/men/32.jpg",
            "Likes detailed proposals",
            Priority::Medium,
        ),
        client(
            3,
            "Emily Rodriguez",
            "emily@marketingguru.com",
            "+1 (555) 456-7890",
            (5, 1),
            18500.0,
            date(2023, 4, 28),
            ClientStatus::Active,
            "https://randomuser.me/api/portraits/women/68.jpg",
            "Quick decision maker",
            Priority::High,
        ),
        client(
            4,
            "David Wilson",
            "david@startupventures.com",
            "+1 (555) 234-5678",
            (3, 0),
            12000.0,
            date(2023, 3, 10),
            ClientStatus::Inactive,
            "https://randomuser.me/api/portraits/men/75.jpg",
            "Potential for more work next quarter",
            Priority::Low,
        ),
        client(
            5,
            "Jessica Kim",
            "jessica@creativeagency.com",
            "+1 (555) 876-5432",
            (15, 4),
            92500.0,
            date(2023, 6, 10),
            ClientStatus::Active,
            "https://randomuser.me/api/portraits/women/12.jpg",
            "Main client - 30% of revenue",
            Priority::High,
        ),
        client(
            6,
            "Robert Taylor",
            "robert@enterprisesolutions.com",
            "+1 (555) 345-6789",
            (7, 2),
            58700.0,
            date(2023, 5, 22),
            ClientStatus::Active,
            "https://randomuser.me/api/portraits/men/43.jpg",
            "Technical projects specialist",
            Priority::Medium,
        ),
    ]
}

fn team(members: &[(&str, &str)]) -> Vec<TeamMember> {
    members
        .iter()
        .map(|(name, role)| TeamMember {
            name: name.to_string(),
            role: role.to_string(),
        })
        .collect()
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "E-Commerce Website Redesign".to_string(),
            status: ProjectStatus::Ongoing,
            deadline: date(2023, 12, 15),
            progress: 65,
            budget: 12500.0,
            client: "FashionHub Inc.".to_string(),
            team: team(&[("You", "Lead Developer"), ("Sarah", "UI Designer"), ("Mike", "Backend Dev")]),
            priority: Priority::High,
            description: "Complete redesign of product pages and checkout flow".to_string(),
        },
        Project {
            id: 2,
            title: "Mobile Banking App".to_string(),
            status: ProjectStatus::Ongoing,
            deadline: date(2023, 12, 30),
            progress: 35,
            budget: 18200.0,
            client: "MetroBank".to_string(),
            team: team(&[("You", "Project Manager"), ("Alex", "Mobile Dev")]),
            priority: Priority::High,
            description: "New features for money transfers and biometric auth".to_string(),
        },
        Project {
            id: 3,
            title: "Marketing Dashboard".to_string(),
            status: ProjectStatus::Upcoming,
            deadline: date(2024, 1, 15),
            progress: 10,
            budget: 8500.0,
            client: "GrowthMarketing LLC".to_string(),
            team: team(&[("You", "Full-stack Dev"), ("Jessica", "Data Analyst")]),
            priority: Priority::Medium,
            description: "Analytics dashboard with real-time data visualization".to_string(),
        },
        Project {
            id: 4,
            title: "CMS Implementation".to_string(),
            status: ProjectStatus::Completed,
            deadline: date(2023, 11, 20),
            progress: 100,
            budget: 9600.0,
            client: "NewsPortal Ltd.".to_string(),
            team: team(&[("You", "WordPress Expert")]),
            priority: Priority::Low,
            description: "Migration from custom solution to WordPress".to_string(),
        },
        Project {
            id: 5,
            title: "IoT Smart Home System".to_string(),
            status: ProjectStatus::OnHold,
            deadline: date(2024, 2, 28),
            progress: 25,
            budget: 22500.0,
            client: "SmartLiving Tech".to_string(),
            team: team(&[("You", "IoT Specialist"), ("David", "Hardware Engineer")]),
            priority: Priority::Medium,
            description: "Integration of smart devices with mobile control".to_string(),
        },
        Project {
            id: 6,
            title: "Portfolio Website".to_string(),
            status: ProjectStatus::Completed,
            deadline: date(2023, 10, 10),
            progress: 100,
            budget: 4200.0,
            client: "Creative Studio".to_string(),
            team: team(&[("You", "Designer & Developer")]),
            priority: Priority::Low,
            description: "Minimalist portfolio for design agency".to_string(),
        },
    ]
}

fn chart(points: &[(&str, f64)]) -> Vec<ChartPoint> {
    points
        .iter()
        .map(|(label, earnings)| ChartPoint {
            label: label.to_string(),
            earnings: *earnings,
        })
        .collect()
}

pub fn earnings() -> EarningsTable {
    EarningsTable {
        monthly: EarningsBucket {
            total: 5200.0,
            completed_projects: 15,
            total_clients: 8,
            recurring: 3200.0,
            one_time: 2000.0,
            growth: 12.5,
            chart: chart(&[("Jan", 3200.0), ("Feb", 4100.0), ("Mar", 3800.0), ("Apr", 5200.0)]),
        },
        quarterly: EarningsBucket {
            total: 15800.0,
            completed_projects: 42,
            total_clients: 12,
            recurring: 9800.0,
            one_time: 6000.0,
            growth: 8.2,
            chart: chart(&[("Q1", 15800.0), ("Q2", 14200.0), ("Q3", 18500.0), ("Q4", 21000.0)]),
        },
        yearly: EarningsBucket {
            total: 69500.0,
            completed_projects: 165,
            total_clients: 28,
            recurring: 42000.0,
            one_time: 27500.0,
            growth: 18.3,
            chart: chart(&[("2020", 52000.0), ("2021", 58000.0), ("2022", 69500.0)]),
        },
    }
}

pub fn transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: 1,
            client: "TechCorp".to_string(),
            amount: 1200.0,
            date: date(2023, 4, 15),
            kind: TransactionType::Recurring,
            status: TransactionStatus::Completed,
        },
        Transaction {
            id: 2,
            client: "DesignStudio".to_string(),
            amount: 850.0,
            date: date(2023, 4, 10),
            kind: TransactionType::OneTime,
            status: TransactionStatus::Completed,
        },
        Transaction {
            id: 3,
            client: "MarketingHub".to_string(),
            amount: 1500.0,
            date: date(2023, 4, 5),
            kind: TransactionType::Recurring,
            status: TransactionStatus::Pending,
        },
    ]
}

pub fn feedback() -> Vec<Feedback> {
    vec![
        Feedback {
            message: "Great job on the project! Will work with you again.",
            client_name: "Client 1",
            rating: 5.0,
        },
        Feedback {
            message: "Excellent communication and work. Highly recommend!",
            client_name: "Client 2",
            rating: 4.5,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_sizes() {
        assert_eq!(clients().len(), 6);
        assert_eq!(projects().len(), 6);
        assert_eq!(transactions().len(), 3);
        assert_eq!(feedback().len(), 2);
    }

    #[test]
    fn test_sample_ids_unique() {
        let mut ids: Vec<u32> = clients().iter().map(|c| c.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 6);

        let mut ids: Vec<u32> = projects().iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_bucket_splits_add_up() {
        let table = earnings();
        for bucket in [&table.monthly, &table.quarterly, &table.yearly] {
            assert_eq!(bucket.recurring + bucket.one_time, bucket.total);
        }
    }
}
