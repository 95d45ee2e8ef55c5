//! Shared chart builders for engine unit tests.
