//! SQLite repository integration tests.

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use banking_types::{
        Account, LedgerRepository, RepoError, Transaction, TransactionKind,
    };

    use crate::SqliteRepo;

    async fn setup_repo() -> SqliteRepo {
        SqliteRepo::new("sqlite::memory:").await.unwrap()
    }

    fn account(owner: &str, number: &str) -> Account {
        Account::new(owner.to_string(), number.to_string()).unwrap()
    }

    /// Posts a draft against a stored account the way the service does:
    /// mutate the balance, stamp the draft, persist both.
    async fn post(repo: &SqliteRepo, number: &str, draft: Transaction) -> Result<(), RepoError> {
        let mut account = repo.find_account(number).await?.unwrap();
        account.post(&draft)?;
        let posted =
            draft.into_posted(number.to_string(), Uuid::new_v4().to_string(), Utc::now());
        repo.save_posting(&account, &posted).await
    }

    #[tokio::test]
    async fn test_create_and_find_account() {
        let repo = setup_repo().await;

        repo.create_account(&account("Ada", "A1")).await.unwrap();

        let found = repo.find_account("A1").await.unwrap().unwrap();
        assert_eq!(found.owner, "Ada");
        assert_eq!(found.account_number, "A1");
        assert_eq!(found.balance, 0);
    }

    #[tokio::test]
    async fn test_find_account_missing() {
        let repo = setup_repo().await;

        let found = repo.find_account("ZZZ").await.unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_account_number_conflicts() {
        let repo = setup_repo().await;

        repo.create_account(&account("Ada", "A1")).await.unwrap();
        let result = repo.create_account(&account("Grace", "A1")).await;

        assert!(matches!(result, Err(RepoError::Conflict(_))));

        // The first account's data survives.
        let found = repo.find_account("A1").await.unwrap().unwrap();
        assert_eq!(found.owner, "Ada");
    }

    #[tokio::test]
    async fn test_save_posting_updates_balance_and_records() {
        let repo = setup_repo().await;
        repo.create_account(&account("Ada", "A1")).await.unwrap();

        post(&repo, "A1", Transaction::deposit(1000)).await.unwrap();
        post(&repo, "A1", Transaction::withdrawal(300)).await.unwrap();

        let found = repo.find_account("A1").await.unwrap().unwrap();
        assert_eq!(found.balance, 700);

        let history = repo.list_transactions("A1").await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].kind, TransactionKind::Deposit);
        assert_eq!(history[0].amount, 1000);
        assert_eq!(history[1].kind, TransactionKind::Withdrawal);
    }

    #[tokio::test]
    async fn test_save_posting_unknown_account() {
        let repo = setup_repo().await;

        let ghost = account("Ghost", "G1");
        let posted = Transaction::deposit(100).into_posted(
            "G1".to_string(),
            Uuid::new_v4().to_string(),
            Utc::now(),
        );

        let result = repo.save_posting(&ghost, &posted).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_bill_payment_round_trips_payee() {
        let repo = setup_repo().await;
        repo.create_account(&account("Ada", "A1")).await.unwrap();

        post(&repo, "A1", Transaction::deposit(100)).await.unwrap();
        post(
            &repo,
            "A1",
            Transaction::bill_payment("Electric Co".to_string(), 40),
        )
        .await
        .unwrap();

        let history = repo.list_transactions("A1").await.unwrap();
        assert_eq!(
            history[1].kind,
            TransactionKind::BillPayment {
                payee: "Electric Co".to_string()
            }
        );

        let found = repo.find_account("A1").await.unwrap().unwrap();
        assert_eq!(found.balance, 60);
    }

    #[tokio::test]
    async fn test_list_transactions_in_posting_order() {
        let repo = setup_repo().await;
        repo.create_account(&account("Ada", "A1")).await.unwrap();
        repo.create_account(&account("Grace", "B2")).await.unwrap();

        for amount in [10, 20, 30] {
            post(&repo, "A1", Transaction::deposit(amount)).await.unwrap();
        }
        post(&repo, "B2", Transaction::deposit(999)).await.unwrap();

        let history = repo.list_transactions("A1").await.unwrap();
        let amounts: Vec<i64> = history.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![10, 20, 30]);

        // Only A1's postings are returned.
        assert!(history.iter().all(|t| t.account_number == "A1"));
    }
}
