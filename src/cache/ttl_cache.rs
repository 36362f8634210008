//! Cache local del proceso con expiración por TTL
//!
//! Cache genérico clave→valor usado para reducir lecturas repetidas dentro
//! de un mismo run del job de notificaciones (odómetro por vehículo y lista
//! de suscripciones). No se comparte entre procesos ni entre runs largos:
//! la única invalidación es la expiración.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

/// Entrada en cache con su timestamp de creación
#[derive(Debug, Clone)]
struct CachedEntry<V> {
    value: V,
    created_at: Instant,
}

/// Estadísticas del cache
#[derive(Debug, Default, Clone)]
pub struct CacheStats {
    /// Total de hits (aciertos)
    pub hits: u64,
    /// Total de misses (fallos)
    pub misses: u64,
    /// Total de entradas creadas
    pub entries_created: u64,
    /// Total de entradas expiradas
    pub entries_expired: u64,
}

/// Cache clave→valor con TTL fijo
pub struct TtlCache<K, V> {
    entries: RwLock<HashMap<K, CachedEntry<V>>>,
    ttl: Duration,
    stats: RwLock<CacheStats>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Crear un cache nuevo con el TTL indicado
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            stats: RwLock::new(CacheStats::default()),
        }
    }

    /// Obtener un valor del cache si existe y no expiró
    pub async fn get(&self, key: &K) -> Option<V> {
        let mut entries = self.entries.write().await;
        let mut stats = self.stats.write().await;

        match entries.get(key) {
            Some(entry) => {
                if entry.created_at.elapsed() > self.ttl {
                    entries.remove(key);
                    stats.entries_expired += 1;
                    stats.misses += 1;
                    debug!("Cache miss (expired)");
                    return None;
                }
                stats.hits += 1;
                Some(entry.value.clone())
            }
            None => {
                stats.misses += 1;
                None
            }
        }
    }

    /// Guardar un valor en el cache
    pub async fn set(&self, key: K, value: V) {
        let mut entries = self.entries.write().await;
        let mut stats = self.stats.write().await;

        entries.insert(
            key,
            CachedEntry {
                value,
                created_at: Instant::now(),
            },
        );
        stats.entries_created += 1;
    }

    /// Eliminar entradas expiradas, devuelve cuántas se limpiaron
    pub async fn cleanup_expired(&self) -> u64 {
        let mut entries = self.entries.write().await;
        let mut stats = self.stats.write().await;

        let initial_size = entries.len();
        entries.retain(|_, entry| entry.created_at.elapsed() <= self.ttl);
        let cleaned = (initial_size - entries.len()) as u64;
        stats.entries_expired += cleaned;

        cleaned
    }

    /// Vaciar el cache completamente
    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        entries.clear();
    }

    /// Obtener estadísticas del cache
    pub async fn stats(&self) -> CacheStats {
        self.stats.read().await.clone()
    }

    /// Obtener tamaño actual del cache
    pub async fn size(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cache_basic_operations() {
        let cache: TtlCache<String, u64> = TtlCache::new(Duration::from_secs(60));

        cache.set("vehiculo-1".to_string(), 50000).await;
        assert_eq!(cache.get(&"vehiculo-1".to_string()).await, Some(50000));
        assert_eq!(cache.get(&"vehiculo-2".to_string()).await, None);

        let stats = cache.stats().await;
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries_created, 1);
    }

    #[tokio::test]
    async fn test_cache_expiration() {
        let cache: TtlCache<String, u64> = TtlCache::new(Duration::from_millis(10));

        cache.set("vehiculo-1".to_string(), 50000).await;
        tokio::time::sleep(Duration::from_millis(30)).await;

        assert_eq!(cache.get(&"vehiculo-1".to_string()).await, None);
        let stats = cache.stats().await;
        assert_eq!(stats.entries_expired, 1);
        assert_eq!(cache.size().await, 0);
    }

    #[tokio::test]
    async fn test_cache_cleanup_expired() {
        let cache: TtlCache<u32, &'static str> = TtlCache::new(Duration::from_millis(10));

        cache.set(1, "a").await;
        cache.set(2, "b").await;
        tokio::time::sleep(Duration::from_millis(30)).await;
        cache.set(3, "c").await;

        let cleaned = cache.cleanup_expired().await;
        assert_eq!(cleaned, 2);
        assert_eq!(cache.size().await, 1);
    }
}
