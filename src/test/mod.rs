mod test_pull;
