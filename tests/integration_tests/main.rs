mod invariants_test;
mod workflow_test;
