pub mod triggered_rule;
