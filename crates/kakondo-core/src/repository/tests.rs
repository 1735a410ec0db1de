//! Repository Integration Tests
//!
//! InMemoryRepository seeded with the dashboard content.

#[cfg(test)]
mod tests {
    use crate::aggregate;
    use crate::content;
    use crate::domain::{Cbo, CboStatus, DomainError, StaffContact, StaffStatus};
    use crate::repository::{InMemoryRepository, Repository};

    fn setup_cbos() -> InMemoryRepository<Cbo> {
        InMemoryRepository::seeded(content::cbos())
    }

    fn new_cbo(name: &str) -> Cbo {
        Cbo::new(name.to_string(), "Kaubasis".to_string(), "Ward 12".to_string(), String::new())
    }

    #[tokio::test]
    async fn test_list_seeded() {
        let repo = setup_cbos();
        let cbos = repo.list().await.expect("List failed");
        assert_eq!(cbos.len(), 5);
        assert_eq!(cbos[0].name, "Gaten Nature Park");
    }

    #[tokio::test]
    async fn test_add_assigns_fresh_id() {
        let repo = setup_cbos();
        let created = repo.add(new_cbo("Kaubasis Mothers Group")).await.expect("Add failed");

        assert!(!created.id.is_empty());
        assert_eq!(created.members, 0);
        assert_eq!(created.status, CboStatus::Active);

        let cbos = repo.list().await.unwrap();
        assert_eq!(cbos.len(), 6);
        assert_eq!(cbos.last().unwrap().id, created.id);
        assert!(cbos[..5].iter().all(|c| c.id != created.id));
    }

    #[tokio::test]
    async fn test_fresh_ids_are_unique() {
        let repo = InMemoryRepository::new();
        let a = repo.add(new_cbo("A")).await.unwrap();
        let b = repo.add(new_cbo("B")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_add_duplicate_id_conflicts() {
        let repo = setup_cbos();
        let mut duplicate = new_cbo("Copy");
        duplicate.id = "1".to_string();

        let err = repo.add(duplicate).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(repo.list().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = setup_cbos();
        let found = repo.find_by_id("3").await.expect("Find failed");
        assert_eq!(found.unwrap().name, "Whoty Nature Conservation");
        assert!(repo.find_by_id("99").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_toggles_status() {
        let repo = setup_cbos();
        let mut cbo = repo.find_by_id("2").await.unwrap().unwrap();
        cbo.status = cbo.status.toggled();

        let updated = repo.update(cbo).await.expect("Update failed");
        assert_eq!(updated.status, CboStatus::Inactive);

        let stats = aggregate(&repo.list().await.unwrap());
        assert_eq!(stats.count(CboStatus::Active), 4);
        assert_eq!(stats.count(CboStatus::Inactive), 1);
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found() {
        let repo = setup_cbos();
        let mut ghost = new_cbo("Ghost");
        ghost.id = "42".to_string();
        assert_eq!(repo.update(ghost).await.unwrap_err(), DomainError::NotFound("42".to_string()));
    }

    #[tokio::test]
    async fn test_remove() {
        let repo = setup_cbos();
        let removed = repo.remove("1").await.expect("Remove failed");
        assert_eq!(removed.members, 45);

        let stats = aggregate(&repo.list().await.unwrap());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.sum, 178 - 45);

        assert!(matches!(repo.remove("1").await, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_staff_roster() {
        let repo = InMemoryRepository::seeded(content::staff_contacts());
        let added = repo
            .add(StaffContact {
                id: String::new(),
                name: "Gaibee Bal".to_string(),
                position: "Tourism and Hospitality Officer".to_string(),
                email: "gaibee.bal@kakondo.org".to_string(),
                phone: String::new(),
                ward: "Ward 11".to_string(),
                status: StaffStatus::Active,
            })
            .await
            .unwrap();

        // Seeds hold ids 1..=3
        assert_eq!(added.id, "4");
        let stats = aggregate(&repo.list().await.unwrap());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.count(StaffStatus::Active), 3);
    }
}
