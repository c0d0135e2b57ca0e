//! Integration tests for pancam.
//!
//! These tests drive the full rig - classifier, buses, and panner wired
//! together - frame by frame, the way a host game loop would.

mod pan_workflow_tests;
