use shared::{
    abstract_trait::{
        reward::service::DynRewardService,
        transaction::{
            repository::{
                command::DynTransactionCommandRepository, query::DynTransactionQueryRepository,
            },
            service::seed::DynTransactionSeedService,
        },
    },
    config::ConnectionPool,
    repository::transaction::{
        command::TransactionCommandRepository, query::TransactionQueryRepository,
    },
    service::{reward::service::RewardService, transaction::seed::TransactionSeedService},
    utils::Metrics,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub reward_service: DynRewardService,
    pub seed_service: DynTransactionSeedService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("reward_service", &"RewardService")
            .field("seed_service", &"TransactionSeedService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(db: ConnectionPool, metrics: Metrics) -> Self {
        let query =
            Arc::new(TransactionQueryRepository::new(db.clone())) as DynTransactionQueryRepository;
        let command =
            Arc::new(TransactionCommandRepository::new(db)) as DynTransactionCommandRepository;

        Self::with_repositories(query, command, metrics)
    }

    pub fn with_repositories(
        query: DynTransactionQueryRepository,
        command: DynTransactionCommandRepository,
        metrics: Metrics,
    ) -> Self {
        let reward_service = Arc::new(RewardService::new(query, metrics)) as DynRewardService;
        let seed_service =
            Arc::new(TransactionSeedService::new(command)) as DynTransactionSeedService;

        Self {
            reward_service,
            seed_service,
        }
    }
}
