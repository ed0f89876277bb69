//! Service-level integration tests
//!
//! Wire the application services against the in-memory mocks and walk the
//! main flows end to end: admin auth, content lifecycle, contact inbox.
//!
//! Run with: cargo test integration_tests

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::app::{AuthService, ContactService, PortfolioService};
    use crate::domain::entities::ProjectUpdate;
    use crate::test_utils::{
        test_new_message, test_new_project, InMemoryMessageRepository, InMemoryProjectRepository,
        InMemorySkillRepository, InMemoryTestimonialRepository, InMemoryUserRepository,
        RecordingNotifier,
    };

    fn portfolio_service() -> PortfolioService<
        InMemoryProjectRepository,
        InMemorySkillRepository,
        InMemoryTestimonialRepository,
    > {
        PortfolioService::new(
            Arc::new(InMemoryProjectRepository::new()),
            Arc::new(InMemorySkillRepository::new()),
            Arc::new(InMemoryTestimonialRepository::new()),
        )
    }

    /// Basic smoke test - verify services can be created
    #[tokio::test]
    async fn services_can_be_created() {
        let _auth_service = AuthService::new(
            Arc::new(InMemoryUserRepository::new()),
            "test-secret".to_string(),
        );

        let _portfolio_service = portfolio_service();

        let _contact_service = ContactService::new(
            Arc::new(InMemoryMessageRepository::new()),
            Arc::new(RecordingNotifier::new()),
        );
    }

    /// Seeded admin can log in, and the token round-trips through verification
    #[tokio::test]
    async fn admin_login_and_verify_flow() {
        let users = Arc::new(InMemoryUserRepository::new());
        let auth_service = AuthService::new(users.clone(), "test-secret".to_string());

        auth_service
            .ensure_admin("admin@example.com", "seed-password", "Admin")
            .await
            .unwrap();

        let (token, user) = auth_service
            .login("admin@example.com", "seed-password")
            .await
            .unwrap();
        assert_eq!(user.role, "admin");

        let verified = auth_service.verify_token(&token).unwrap();
        assert_eq!(verified, user);

        assert!(auth_service.verify_token("garbage").is_err());
    }

    /// Draft projects become publicly visible only after publishing
    #[tokio::test]
    async fn project_publish_lifecycle() {
        let service = portfolio_service();

        let draft = service
            .create_project(test_new_project("portfolio-site"))
            .await
            .unwrap();
        assert!(service.list_public_projects().await.unwrap().is_empty());

        let update = ProjectUpdate {
            published: Some(true),
            ..Default::default()
        };
        service.update_project(&draft.id, update).await.unwrap();

        let public = service.list_public_projects().await.unwrap();
        assert_eq!(public.len(), 1);
        assert_eq!(public[0].title, "portfolio-site");

        service.delete_project(&draft.id).await.unwrap();
        assert!(service.list_public_projects().await.unwrap().is_empty());
    }

    /// Published lists come back in display order
    #[tokio::test]
    async fn public_lists_respect_sort_order() {
        let service = portfolio_service();

        for (title, order) in [("third", 2), ("first", 0), ("second", 1)] {
            let mut project = test_new_project(title);
            project.published = true;
            project.sort_order = order;
            service.create_project(project).await.unwrap();
        }

        let titles: Vec<_> = service
            .list_public_projects()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    /// Contact submissions land in the admin inbox and notify in the background
    #[tokio::test]
    async fn contact_inbox_flow() {
        let notifier = Arc::new(RecordingNotifier::new());
        let contact_service = ContactService::new(
            Arc::new(InMemoryMessageRepository::new()),
            notifier.clone(),
        );

        let stored = contact_service
            .submit(test_new_message("Visitor"))
            .await
            .unwrap();

        let unread = contact_service.list_messages(Some(false)).await.unwrap();
        assert_eq!(unread.len(), 1);
        assert_eq!(unread[0].email, "visitor@example.com");

        contact_service.set_read(&stored.id, true).await.unwrap();
        assert!(contact_service
            .list_messages(Some(false))
            .await
            .unwrap()
            .is_empty());
        assert_eq!(
            contact_service
                .list_messages(Some(true))
                .await
                .unwrap()
                .len(),
            1
        );

        // Give the spawned delivery a chance to run
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        assert_eq!(notifier.delivered().await.len(), 1);
    }
}
