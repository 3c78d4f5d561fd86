pub mod diet_plan_repository;
