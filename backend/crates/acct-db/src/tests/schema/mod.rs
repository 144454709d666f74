mod uniqueness_strategy;
