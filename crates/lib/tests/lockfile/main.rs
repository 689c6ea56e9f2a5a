//! Integration tests for the lock store against a real directory tree.
