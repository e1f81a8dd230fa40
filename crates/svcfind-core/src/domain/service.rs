//! Service taxonomy: the fixed set of customer-service categories.
//!
//! The registry is built once at startup and never mutated afterwards, so it
//! can be shared across concurrent requests without synchronization.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Id of the designated fallback service ("Atendimento humano").
pub const FALLBACK_SERVICE_ID: i32 = 15;

/// Id of the sentinel returned for input unrelated to the taxonomy.
pub const UNMAPPED_SERVICE_ID: i32 = 0;

/// Display name of the unmapped sentinel.
pub const UNMAPPED_SERVICE_NAME: &str = "não mapeado";

/// A single customer-service category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    /// Category id (1-16, or 0 for the unmapped sentinel).
    pub id: i32,
    /// Display name, as the classification model is instructed to echo it.
    pub name: String,
}

impl ServiceDefinition {
    /// Create a new definition.
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// The `0 / "não mapeado"` sentinel.
    pub fn unmapped() -> Self {
        Self::new(UNMAPPED_SERVICE_ID, UNMAPPED_SERVICE_NAME)
    }
}

const DEFAULT_SERVICES: &[(i32, &str)] = &[
    (1, "Consulta Limite / Vencimento do cartão / Melhor dia de compra"),
    (2, "Segunda via de boleto de acordo"),
    (3, "Segunda via de Fatura"),
    (4, "Status de Entrega do Cartão"),
    (5, "Status de cartão"),
    (6, "Solicitação de aumento de limite"),
    (7, "Cancelamento de cartão"),
    (8, "Telefones de seguradoras"),
    (9, "Desbloqueio de Cartão"),
    (10, "Esqueceu senha / Troca de senha"),
    (11, "Perda e roubo"),
    (12, "Consulta do Saldo"),
    (13, "Pagamento de contas"),
    (14, "Reclamações"),
    (15, "Atendimento humano"),
    (16, "Token de proposta"),
];

/// Keyed, ordered collection of every [`ServiceDefinition`] plus the
/// designated fallback.
#[derive(Debug, Clone)]
pub struct ServiceRegistry {
    services: BTreeMap<i32, ServiceDefinition>,
    fallback_id: i32,
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceRegistry {
    /// Build the registry from the fixed sixteen-category table.
    pub fn new() -> Self {
        let services = DEFAULT_SERVICES
            .iter()
            .map(|&(id, name)| (id, ServiceDefinition::new(id, name)))
            .collect();

        Self {
            services,
            fallback_id: FALLBACK_SERVICE_ID,
        }
    }

    /// Build a registry from arbitrary definitions.
    ///
    /// Returns `None` when `fallback_id` does not name one of `services`.
    pub fn from_definitions(
        services: impl IntoIterator<Item = ServiceDefinition>,
        fallback_id: i32,
    ) -> Option<Self> {
        let services: BTreeMap<_, _> = services.into_iter().map(|s| (s.id, s)).collect();
        services.contains_key(&fallback_id).then_some(Self {
            services,
            fallback_id,
        })
    }

    /// Every service, ordered by id.
    pub fn all(&self) -> impl Iterator<Item = &ServiceDefinition> {
        self.services.values()
    }

    /// Look a service up by id.
    pub fn get(&self, id: i32) -> Option<&ServiceDefinition> {
        self.services.get(&id)
    }

    /// The designated fallback service.
    pub fn fallback(&self) -> &ServiceDefinition {
        // from_definitions/new guarantee the fallback id is present
        &self.services[&self.fallback_id]
    }

    /// Number of registered services (the unmapped sentinel is not counted).
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the registry holds no services.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
