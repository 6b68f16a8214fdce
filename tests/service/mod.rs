mod distance;
