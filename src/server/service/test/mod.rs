mod favorite;
