//! Tests for the screen controllers
//!
//! Exercises the request lifecycle shared by every screen: validation before
//! sending, the single in-flight call, delayed return to the list, teardown
//! and the list cache.

#[cfg(test)]
mod tests {
    use crate::controllers::{
        CreateUser, DeleteTarget, InteractionController, InteractionStatus, ListUsers, LoadUser,
        LookupUser, Settlement, UpdateUser, UserDraft, UserListScreen,
    };
    use crate::session::SessionCoordinator;
    use crate::test_support::{
        FakeGateway, MemoryCredentialStore, NeverTimer, ScriptedConfirm, env, env_with_timer, user,
    };
    use futures::{pin_mut, poll};
    use std::cell::Cell;
    use std::rc::Rc;

    fn draft(name: &str, age: &str) -> UserDraft {
        UserDraft {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            age: age.to_string(),
            occupation: "Engineer".to_string(),
        }
    }

    /// Tests that invalid input fails locally without a remote call
    #[tokio::test]
    async fn test_validation_failure_makes_no_call() {
        let gateway = Rc::new(FakeGateway::new());
        let controller = InteractionController::new(env(&gateway), CreateUser);

        let settlement = controller.submit(draft("Ada", "abc")).await;
        assert!(settlement.into_redirect().is_none());
        assert_eq!(
            controller.status(),
            InteractionStatus::Failed("Please enter a valid age".to_string())
        );

        controller
            .submit(UserDraft {
                name: String::new(),
                ..draft("Ada", "30")
            })
            .await;
        assert_eq!(
            controller.status(),
            InteractionStatus::Failed("Please fill in all fields".to_string())
        );
        assert_eq!(gateway.call_count(), 0);
    }

    /// Tests that a create invalidates the list cache and schedules the return
    #[tokio::test]
    async fn test_create_invalidates_snapshot_and_redirects() {
        let gateway = Rc::new(FakeGateway::new());
        let env = env(&gateway);
        env.snapshot.replace(vec![user("1", "Grace")]);
        let controller = InteractionController::new(env.clone(), CreateUser);

        let settlement = controller.submit(draft("Ada", "36")).await;
        assert_eq!(
            controller.status(),
            InteractionStatus::Succeeded(Some("User created successfully!".to_string()))
        );
        assert!(env.snapshot.is_stale());
        assert_eq!(env.snapshot.current(), None);
        assert!(controller.has_pending_redirect());

        let redirect = settlement.into_redirect().expect("redirect scheduled");
        assert!(redirect.elapsed().await);
        assert_eq!(gateway.stored_users()[0].name, "Ada");
    }

    /// Tests that leaving the screen cancels the pending redirect
    #[tokio::test]
    async fn test_teardown_cancels_redirect() {
        let gateway = Rc::new(FakeGateway::new());
        let controller =
            InteractionController::new(env_with_timer(&gateway, Rc::new(NeverTimer)), CreateUser);

        let redirect = controller
            .submit(draft("Ada", "36"))
            .await
            .into_redirect()
            .expect("redirect scheduled");
        controller.teardown();

        assert!(!controller.has_pending_redirect());
        assert!(!redirect.elapsed().await);
    }

    /// Tests that a new submit cancels the redirect left by the previous one
    #[tokio::test]
    async fn test_resubmit_cancels_previous_redirect() {
        let gateway = Rc::new(FakeGateway::new());
        let controller =
            InteractionController::new(env_with_timer(&gateway, Rc::new(NeverTimer)), CreateUser);

        let first = controller
            .submit(draft("Ada", "36"))
            .await
            .into_redirect()
            .expect("redirect scheduled");
        controller.submit(draft("Bob", "0")).await;

        assert!(!first.elapsed().await);
        assert!(controller.status().is_failed());
    }

    /// Tests that a second submit is refused while the first is in flight
    #[tokio::test]
    async fn test_submit_while_pending_is_busy() {
        let gateway = Rc::new(FakeGateway::new());
        let controller = InteractionController::new(env(&gateway), CreateUser);
        let release = gateway.hold_next();

        let first = controller.submit(draft("Ada", "36"));
        pin_mut!(first);
        assert!(poll!(first.as_mut()).is_pending());
        assert!(controller.is_pending());

        let second = controller.submit(draft("Bob", "40")).await;
        assert!(matches!(second, Settlement::Busy));

        release.send(()).unwrap();
        assert!(matches!(first.await, Settlement::Settled { .. }));
        assert_eq!(gateway.calls(), vec!["create_user"]);
        assert_eq!(gateway.stored_users().len(), 1);
    }

    /// Tests that a response arriving after teardown is dropped
    #[tokio::test]
    async fn test_late_response_discarded_after_teardown() {
        let gateway = Rc::new(FakeGateway::new());
        let env = env(&gateway);
        env.snapshot.replace(Vec::new());
        let controller = InteractionController::new(env.clone(), CreateUser);
        let notified = Rc::new(Cell::new(0));
        let counter = Rc::clone(&notified);
        controller.subscribe(Rc::new(move || counter.set(counter.get() + 1)));
        let release = gateway.hold_next();

        let pending = controller.submit(draft("Ada", "36"));
        pin_mut!(pending);
        assert!(poll!(pending.as_mut()).is_pending());
        let seen_before_teardown = notified.get();

        controller.teardown();
        release.send(()).unwrap();

        assert!(matches!(pending.await, Settlement::Discarded));
        assert_eq!(notified.get(), seen_before_teardown);
        assert!(controller.output().is_none());
        assert!(env.snapshot.is_stale());
        assert!(matches!(
            controller.submit(draft("Bob", "40")).await,
            Settlement::Discarded
        ));
    }

    /// Tests that lookups tell a missing record apart from other failures
    #[tokio::test]
    async fn test_lookup_messages() {
        let gateway = Rc::new(FakeGateway::with_users(vec![user("1", "Ada")]));
        let controller = InteractionController::new(env(&gateway), LookupUser);

        controller.submit(" 1 ".to_string()).await;
        assert!(controller.status().is_succeeded());
        assert_eq!(controller.output().map(|record| record.name), Some("Ada".to_string()));

        controller.submit("99".to_string()).await;
        assert_eq!(
            controller.status(),
            InteractionStatus::Failed("User not found".to_string())
        );
        assert!(controller.output().is_none());

        gateway.go_offline();
        controller.submit("1".to_string()).await;
        assert_eq!(
            controller.status(),
            InteractionStatus::Failed("Failed to fetch user details".to_string())
        );

        controller.reset();
        assert_eq!(controller.status(), InteractionStatus::Idle);
    }

    /// Tests that a blank lookup id is rejected locally
    #[tokio::test]
    async fn test_lookup_blank_id() {
        let gateway = Rc::new(FakeGateway::new());
        let controller = InteractionController::new(env(&gateway), LookupUser);

        controller.submit("   ".to_string()).await;
        assert_eq!(
            controller.status(),
            InteractionStatus::Failed("Please enter a user ID".to_string())
        );
        assert_eq!(gateway.call_count(), 0);
    }

    /// Tests that the list screen reuses a fresh cache
    #[tokio::test]
    async fn test_list_uses_fresh_snapshot() {
        let gateway = Rc::new(FakeGateway::with_users(vec![user("1", "Ada")]));
        let env = env(&gateway);
        let screen = UserListScreen::new(env.clone());

        screen.load().await;
        assert_eq!(gateway.calls(), vec!["list_users"]);
        assert!(!env.snapshot.is_stale());

        let again = UserListScreen::new(env);
        again.load().await;
        assert_eq!(gateway.call_count(), 1);
        assert_eq!(again.users(), vec![user("1", "Ada")]);
    }

    /// Tests the list failure message
    #[tokio::test]
    async fn test_list_failure() {
        let gateway = Rc::new(FakeGateway::new());
        gateway.go_offline();
        let controller = InteractionController::new(env(&gateway), ListUsers);

        controller.submit(()).await;
        assert_eq!(
            controller.status(),
            InteractionStatus::Failed("Failed to fetch users".to_string())
        );
    }

    /// Tests that declining the confirmation sends nothing
    #[tokio::test]
    async fn test_delete_declined() {
        let gateway = Rc::new(FakeGateway::with_users(vec![user("1", "Ada")]));
        let screen = UserListScreen::new(env(&gateway));
        let confirm = ScriptedConfirm::answering(false);

        let settlement = screen.delete(DeleteTarget::from(&user("1", "Ada")), &confirm).await;
        assert!(matches!(settlement, Settlement::Declined));
        assert_eq!(confirm.prompts(), vec!["Are you sure you want to delete Ada?"]);
        assert_eq!(screen.delete_status(), InteractionStatus::Idle);
        assert_eq!(gateway.call_count(), 0);
    }

    /// Tests that a confirmed delete re-fetches the whole list
    #[tokio::test]
    async fn test_delete_confirmed_refetches() {
        let gateway = Rc::new(FakeGateway::with_users(vec![user("1", "Ada"), user("2", "Grace")]));
        let screen = UserListScreen::new(env(&gateway));
        screen.load().await;

        screen
            .delete(DeleteTarget::from(&user("1", "Ada")), &ScriptedConfirm::answering(true))
            .await;

        assert_eq!(gateway.calls(), vec!["list_users", "delete_user", "list_users"]);
        assert_eq!(
            screen.delete_status(),
            InteractionStatus::Succeeded(Some("User Ada deleted successfully".to_string()))
        );
        assert_eq!(screen.users(), vec![user("2", "Grace")]);
    }

    /// Tests that a failed delete keeps the list as it was
    #[tokio::test]
    async fn test_delete_failure() {
        let gateway = Rc::new(FakeGateway::with_users(vec![user("1", "Ada")]));
        let screen = UserListScreen::new(env(&gateway));
        screen.load().await;

        screen
            .delete(DeleteTarget::from(&user("9", "Ghost")), &ScriptedConfirm::answering(true))
            .await;

        assert_eq!(
            screen.delete_status(),
            InteractionStatus::Failed("Failed to delete user".to_string())
        );
        assert_eq!(gateway.calls(), vec!["list_users", "delete_user"]);
        assert_eq!(screen.users(), vec![user("1", "Ada")]);
    }

    /// Tests that two edits in a row both land in order
    #[tokio::test]
    async fn test_sequential_updates() {
        let gateway = Rc::new(FakeGateway::with_users(vec![user("1", "Ada")]));
        let env = env(&gateway);
        let loader = InteractionController::new(env.clone(), LoadUser);
        let updater = InteractionController::new(env, UpdateUser::new("1"));

        loader.submit("1".to_string()).await;
        let mut form = UserDraft::from(&loader.output().expect("record loaded"));
        form.age = "37".to_string();
        updater.submit(form.clone()).await;
        form.occupation = "Analyst".to_string();
        updater.submit(form).await;

        let stored = &gateway.stored_users()[0];
        assert_eq!(stored.age, 37);
        assert_eq!(stored.occupation, "Analyst");
        assert_eq!(
            updater.status(),
            InteractionStatus::Succeeded(Some("User updated successfully!".to_string()))
        );
    }

    /// Tests a full session: sign in, add a record, remove it again
    #[tokio::test]
    async fn test_sign_in_create_and_delete() {
        let gateway = Rc::new(FakeGateway::new());
        let store = Rc::new(MemoryCredentialStore::default());
        let coordinator = SessionCoordinator::new(Rc::clone(&gateway), store);
        assert!(coordinator.login("admin", "admin123").await.is_ok());

        let env = env(&gateway);
        let creator = InteractionController::new(env.clone(), CreateUser);
        creator.submit(draft("Ada", "36")).await;
        let created = creator.output().expect("record created");

        let screen = UserListScreen::new(env.clone());
        screen.load().await;
        assert_eq!(screen.users(), vec![created.clone()]);

        screen
            .delete(DeleteTarget::from(&created), &ScriptedConfirm::answering(true))
            .await;
        assert!(screen.users().is_empty());
        assert!(gateway.stored_users().is_empty());

        let next = UserListScreen::new(env);
        next.load().await;
        assert!(next.list_status().is_succeeded());
        assert!(next.users().iter().all(|record| record.id != created.id));
    }

    /// Tests that a list screen opened after a delete never shows the deleted record
    #[tokio::test]
    async fn test_list_after_delete_omits_record() {
        let gateway = Rc::new(FakeGateway::with_users(vec![user("1", "Ada"), user("2", "Grace")]));
        let env = env(&gateway);
        let screen = UserListScreen::new(env.clone());
        screen.load().await;
        screen
            .delete(DeleteTarget::from(&user("1", "Ada")), &ScriptedConfirm::answering(true))
            .await;
        screen.teardown();

        let next = UserListScreen::new(env);
        next.load().await;
        assert_eq!(next.users(), vec![user("2", "Grace")]);
        assert_eq!(gateway.calls(), vec!["list_users", "delete_user", "list_users"]);
    }

    /// Tests that a list response arriving after teardown cannot refresh a
    /// cache that a later mutation marked stale
    #[tokio::test]
    async fn test_late_list_response_keeps_cache_stale() {
        let gateway = Rc::new(FakeGateway::with_users(vec![user("1", "Grace")]));
        let env = env(&gateway);
        let screen = UserListScreen::new(env.clone());
        let release = gateway.hold_next();

        let loading = screen.load();
        pin_mut!(loading);
        assert!(poll!(loading.as_mut()).is_pending());
        screen.teardown();

        let creator = InteractionController::new(env.clone(), CreateUser);
        creator.submit(draft("Ada", "36")).await;
        assert!(env.snapshot.is_stale());

        release.send(()).unwrap();
        assert!(matches!(loading.await, Settlement::Discarded));
        assert!(env.snapshot.is_stale());
        assert_eq!(env.snapshot.current(), None);

        let next = UserListScreen::new(env);
        next.load().await;
        assert_eq!(gateway.calls(), vec!["list_users", "create_user", "list_users"]);
        assert_eq!(next.users().len(), 2);
    }

    /// Tests that a mutation finishing after teardown still marks the cache stale
    #[tokio::test]
    async fn test_late_mutation_still_invalidates() {
        let gateway = Rc::new(FakeGateway::new());
        let env = env(&gateway);
        env.snapshot.replace(vec![user("1", "Grace")]);
        let creator = InteractionController::new(env.clone(), CreateUser);
        let release = gateway.hold_next();

        let pending = creator.submit(draft("Ada", "36"));
        pin_mut!(pending);
        assert!(poll!(pending.as_mut()).is_pending());
        creator.teardown();
        release.send(()).unwrap();

        assert!(matches!(pending.await, Settlement::Discarded));
        assert!(env.snapshot.is_stale());
    }

    /// Tests that clearing the screen mid-request neither unlocks a second
    /// call nor hides the result of the first
    #[tokio::test]
    async fn test_reset_while_pending_is_ignored() {
        let gateway = Rc::new(FakeGateway::with_users(vec![user("1", "Ada"), user("2", "Grace")]));
        let controller = InteractionController::new(env(&gateway), LookupUser);
        let release = gateway.hold_next();

        let first = controller.submit("1".to_string());
        pin_mut!(first);
        assert!(poll!(first.as_mut()).is_pending());

        controller.reset();
        assert!(controller.is_pending());
        assert!(matches!(
            controller.submit("2".to_string()).await,
            Settlement::Busy
        ));

        release.send(()).unwrap();
        first.await;
        assert_eq!(gateway.calls(), vec!["get_user"]);
        assert_eq!(controller.output().map(|record| record.name), Some("Ada".to_string()));

        controller.reset();
        assert_eq!(controller.status(), InteractionStatus::Idle);
        assert!(controller.output().is_none());
    }
}
